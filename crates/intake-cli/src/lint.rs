use std::collections::BTreeSet;
use std::fmt;

use intake_spec::{ConditionOperator, Question, QuestionId, Questionnaire};

/// A well-formedness problem found in a questionnaire definition.
///
/// The engine itself treats malformed data leniently (conditions fall back to
/// their no-answer branches), so these checks exist to catch authoring
/// mistakes before a questionnaire is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub question_id: Option<QuestionId>,
    pub message: String,
}

impl LintIssue {
    fn for_question(question: &Question, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(question.id),
            message: message.into(),
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.question_id {
            Some(id) => write!(f, "question {}: {}", id, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Checks the preconditions the evaluator assumes. Expects the questionnaire
/// to be in display order (`normalize` first).
pub fn lint(questionnaire: &Questionnaire) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    let mut seen_ids = BTreeSet::new();
    for question in &questionnaire.questions {
        if !seen_ids.insert(question.id) {
            issues.push(LintIssue::for_question(question, "duplicate question id"));
        }
    }

    let mut earlier_ids: BTreeSet<QuestionId> = BTreeSet::new();
    for question in &questionnaire.questions {
        lint_options(question, &mut issues);
        lint_condition(question, &earlier_ids, &seen_ids, &mut issues);
        earlier_ids.insert(question.id);
    }

    issues
}

fn lint_options(question: &Question, issues: &mut Vec<LintIssue>) {
    if question.kind.is_choice() && question.options.is_empty() {
        issues.push(LintIssue::for_question(
            question,
            "choice question has no options",
        ));
    }
    let mut seen = BTreeSet::new();
    for option in &question.options {
        if !seen.insert(option.id) {
            issues.push(LintIssue::for_question(
                question,
                format!("duplicate option id {}", option.id),
            ));
        }
    }
}

fn lint_condition(
    question: &Question,
    earlier_ids: &BTreeSet<QuestionId>,
    all_ids: &BTreeSet<QuestionId>,
    issues: &mut Vec<LintIssue>,
) {
    let Some(condition) = &question.show_if else {
        return;
    };

    for single in &condition.conditions {
        if !all_ids.contains(&single.question_id) {
            issues.push(LintIssue::for_question(
                question,
                format!(
                    "condition references unknown question {}",
                    single.question_id
                ),
            ));
        } else if !earlier_ids.contains(&single.question_id) {
            issues.push(LintIssue::for_question(
                question,
                format!(
                    "condition references question {} which does not occur earlier",
                    single.question_id
                ),
            ));
        }

        match single.operator {
            ConditionOperator::Answered | ConditionOperator::NotAnswered => {}
            ConditionOperator::Contains => {
                if single.selected_option_ids.is_none() {
                    issues.push(LintIssue::for_question(
                        question,
                        "'contains' condition without selectedOptionIds never matches",
                    ));
                }
            }
            ConditionOperator::Equals
            | ConditionOperator::NotEquals
            | ConditionOperator::NotContains => {
                if single.selected_option_ids.is_none() && single.text_value.is_none() {
                    issues.push(LintIssue::for_question(
                        question,
                        "condition carries neither selectedOptionIds nor textValue",
                    ));
                }
            }
        }
    }
}
