use std::collections::BTreeSet;

use crate::answers::{Answer, AnswerStore};
use crate::spec::condition::{ConditionLogic, ConditionOperator, QuestionCondition, SingleCondition};
use crate::spec::question::Question;
use crate::spec::questionnaire::Questionnaire;

/// Computes the ordered sublist of questions that are currently visible.
///
/// Pure function of the questionnaire and the answers recorded so far;
/// recomputed from scratch on every call rather than cached, so the result can
/// never go stale. A question with no condition is always visible. A condition
/// referencing an unknown question id evaluates through its operator's
/// no-answer branch, never as an error.
pub fn visible_questions<'a>(
    questionnaire: &'a Questionnaire,
    answers: &AnswerStore,
) -> Vec<&'a Question> {
    questionnaire
        .questions
        .iter()
        .filter(|question| match &question.show_if {
            Some(condition) => condition_holds(condition, answers),
            None => true,
        })
        .collect()
}

/// Evaluates a full visibility condition against the answer store.
///
/// AND requires every single condition to hold (vacuously true when the list
/// is empty); OR requires at least one.
pub fn condition_holds(condition: &QuestionCondition, answers: &AnswerStore) -> bool {
    match condition.logic {
        ConditionLogic::And => condition
            .conditions
            .iter()
            .all(|single| single_condition_holds(single, answers)),
        ConditionLogic::Or => condition
            .conditions
            .iter()
            .any(|single| single_condition_holds(single, answers)),
    }
}

fn single_condition_holds(condition: &SingleCondition, answers: &AnswerStore) -> bool {
    let answer = answers.get(condition.question_id);

    match condition.operator {
        ConditionOperator::Answered => answer.is_some(),
        ConditionOperator::NotAnswered => answer.is_none(),
        ConditionOperator::Equals => answer.is_some_and(|answer| equals(condition, answer)),
        // Vacuously not-equal when nothing was answered. Asymmetric with
        // `equals` on purpose; the reference behaves this way.
        ConditionOperator::NotEquals => answer.is_none_or(|answer| !equals(condition, answer)),
        ConditionOperator::Contains => answer.is_some_and(|answer| contains(condition, answer)),
        ConditionOperator::NotContains => {
            answer.is_none_or(|answer| !contains_lenient(condition, answer))
        }
    }
}

/// Exact comparison: option sets compare order-independently, texts compare
/// for string equality, mismatched payload kinds compare unequal.
fn equals(condition: &SingleCondition, answer: &Answer) -> bool {
    if let Some(expected) = &condition.selected_option_ids
        && let Some(selected) = &answer.selected_option_ids
    {
        let expected: BTreeSet<_> = expected.iter().collect();
        let selected: BTreeSet<_> = selected.iter().collect();
        return expected == selected;
    }
    if let Some(expected) = &condition.text_value
        && let Some(text) = &answer.text_answer
    {
        return text == expected;
    }
    false
}

/// Overlap test. Only meaningful when the condition carries an option-id set;
/// without one the test fails outright, even for text answers.
fn contains(condition: &SingleCondition, answer: &Answer) -> bool {
    let Some(expected) = &condition.selected_option_ids else {
        return false;
    };
    if let Some(selected) = &answer.selected_option_ids {
        return expected.iter().any(|id| selected.contains(id));
    }
    if let Some(needle) = &condition.text_value
        && let Some(text) = &answer.text_answer
    {
        return text.contains(needle);
    }
    false
}

/// Overlap test as negated by `not_contains`, which does not require an
/// option-id payload: a text-only condition still matches against text.
fn contains_lenient(condition: &SingleCondition, answer: &Answer) -> bool {
    if let Some(expected) = &condition.selected_option_ids
        && let Some(selected) = &answer.selected_option_ids
    {
        return expected.iter().any(|id| selected.contains(id));
    }
    if let Some(needle) = &condition.text_value
        && let Some(text) = &answer.text_answer
    {
        return text.contains(needle);
    }
    false
}
