use intake_spec::{
    Answer, AnswerStore, ConditionLogic, ConditionOperator, Question, QuestionCondition,
    QuestionOption, QuestionType, Questionnaire, SingleCondition, visible_questions,
};

fn question(id: i64, kind: QuestionType, order: i64) -> Question {
    Question {
        id,
        question_text: format!("Question {}", id),
        kind,
        is_required: false,
        order,
        help_text: None,
        show_if: None,
        options: vec![],
    }
}

fn choice_question(id: i64, order: i64, option_ids: &[i64]) -> Question {
    let mut built = question(id, QuestionType::MultipleChoice, order);
    built.options = option_ids
        .iter()
        .map(|&option_id| QuestionOption {
            id: option_id,
            option_text: format!("Option {}", option_id),
            order: option_id,
        })
        .collect();
    built
}

fn questionnaire(questions: Vec<Question>) -> Questionnaire {
    Questionnaire {
        id: 1,
        title: "Registration intake".into(),
        description: None,
        is_active: true,
        is_required: false,
        questions,
    }
}

fn show_if(logic: ConditionLogic, conditions: Vec<SingleCondition>) -> QuestionCondition {
    QuestionCondition { logic, conditions }
}

fn cond(question_id: i64, operator: ConditionOperator) -> SingleCondition {
    SingleCondition {
        question_id,
        operator,
        selected_option_ids: None,
        text_value: None,
    }
}

fn cond_ids(question_id: i64, operator: ConditionOperator, ids: &[i64]) -> SingleCondition {
    SingleCondition {
        selected_option_ids: Some(ids.to_vec()),
        ..cond(question_id, operator)
    }
}

fn cond_text(question_id: i64, operator: ConditionOperator, text: &str) -> SingleCondition {
    SingleCondition {
        text_value: Some(text.into()),
        ..cond(question_id, operator)
    }
}

fn ids(questions: &[&Question]) -> Vec<i64> {
    questions.iter().map(|question| question.id).collect()
}

#[test]
fn unconditional_questions_are_always_visible() {
    let sheet = questionnaire(vec![
        question(1, QuestionType::OpenText, 1),
        question(2, QuestionType::OpenText, 2),
    ]);

    let mut answers = AnswerStore::new();
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);

    answers.set(Answer::text(1, "anything"));
    answers.set(Answer::text(99, "even answers to unknown ids"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);
}

#[test]
fn answered_gate_reveals_follow_up() {
    let mut follow_up = question(2, QuestionType::OpenText, 2);
    follow_up.show_if = Some(show_if(
        ConditionLogic::And,
        vec![cond(1, ConditionOperator::Answered)],
    ));
    let sheet = questionnaire(vec![question(1, QuestionType::OpenText, 1), follow_up]);

    let mut answers = AnswerStore::new();
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1]);

    answers.set(Answer::text(1, "hello"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);
}

#[test]
fn and_requires_every_condition() {
    let mut gated = question(3, QuestionType::OpenText, 3);
    gated.show_if = Some(show_if(
        ConditionLogic::And,
        vec![
            cond(1, ConditionOperator::Answered),
            cond(2, ConditionOperator::Answered),
        ],
    ));
    let sheet = questionnaire(vec![
        question(1, QuestionType::OpenText, 1),
        question(2, QuestionType::OpenText, 2),
        gated,
    ]);

    let mut answers = AnswerStore::new();
    answers.set(Answer::text(1, "first"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);

    answers.set(Answer::text(2, "second"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2, 3]);
}

#[test]
fn or_requires_any_condition() {
    let mut gated = question(3, QuestionType::OpenText, 3);
    gated.show_if = Some(show_if(
        ConditionLogic::Or,
        vec![
            cond(1, ConditionOperator::Answered),
            cond(2, ConditionOperator::Answered),
        ],
    ));
    let sheet = questionnaire(vec![
        question(1, QuestionType::OpenText, 1),
        question(2, QuestionType::OpenText, 2),
        gated,
    ]);

    let mut answers = AnswerStore::new();
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);

    answers.set(Answer::text(2, "second"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2, 3]);
}

#[test]
fn equals_compares_option_sets_order_independently() {
    let mut gated = question(2, QuestionType::OpenText, 2);
    gated.show_if = Some(show_if(
        ConditionLogic::And,
        vec![cond_ids(1, ConditionOperator::Equals, &[1, 2])],
    ));
    let sheet = questionnaire(vec![choice_question(1, 1, &[1, 2, 3]), gated]);

    let mut answers = AnswerStore::new();
    answers.set(Answer::options(1, [2, 1]));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);

    answers.set(Answer::options(1, [2, 1, 3]));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1]);
}

#[test]
fn equals_is_false_without_an_answer_but_not_equals_is_true() {
    let mut on_equals = question(2, QuestionType::OpenText, 2);
    on_equals.show_if = Some(show_if(
        ConditionLogic::And,
        vec![cond_text(1, ConditionOperator::Equals, "yes")],
    ));
    let mut on_not_equals = question(3, QuestionType::OpenText, 3);
    on_not_equals.show_if = Some(show_if(
        ConditionLogic::And,
        vec![cond_text(1, ConditionOperator::NotEquals, "yes")],
    ));
    let sheet = questionnaire(vec![
        question(1, QuestionType::OpenText, 1),
        on_equals,
        on_not_equals,
    ]);

    // Vacuously not-equal before anything is answered. The positive and
    // negative forms are deliberately asymmetric here.
    let answers = AnswerStore::new();
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 3]);

    let mut answers = AnswerStore::new();
    answers.set(Answer::text(1, "yes"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);

    let mut answers = AnswerStore::new();
    answers.set(Answer::text(1, "no"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 3]);
}

#[test]
fn not_equals_is_true_for_mismatched_payload_kinds() {
    let mut gated = question(2, QuestionType::OpenText, 2);
    gated.show_if = Some(show_if(
        ConditionLogic::And,
        vec![cond_ids(1, ConditionOperator::NotEquals, &[1])],
    ));
    let sheet = questionnaire(vec![question(1, QuestionType::OpenText, 1), gated]);

    // Text answer against an option-set condition: "not equals" by default.
    let mut answers = AnswerStore::new();
    answers.set(Answer::text(1, "free text"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);
}

#[test]
fn contains_matches_option_overlap() {
    let mut gated = question(2, QuestionType::OpenText, 2);
    gated.show_if = Some(show_if(
        ConditionLogic::And,
        vec![cond_ids(1, ConditionOperator::Contains, &[2, 4])],
    ));
    let sheet = questionnaire(vec![choice_question(1, 1, &[1, 2, 3]), gated]);

    let mut answers = AnswerStore::new();
    answers.set(Answer::options(1, [1, 3]));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1]);

    answers.set(Answer::options(1, [1, 2]));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);
}

#[test]
fn contains_requires_an_option_id_payload() {
    // A text-only `contains` condition never matches, even a matching
    // substring; the operator's substring branch is only reachable when the
    // condition carries an option-id set.
    let mut gated = question(2, QuestionType::OpenText, 2);
    gated.show_if = Some(show_if(
        ConditionLogic::And,
        vec![cond_text(1, ConditionOperator::Contains, "anx")],
    ));
    let sheet = questionnaire(vec![question(1, QuestionType::OpenText, 1), gated]);

    let mut answers = AnswerStore::new();
    answers.set(Answer::text(1, "anxiety"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1]);
}

#[test]
fn contains_falls_back_to_substring_for_text_answers() {
    let mut gated = question(2, QuestionType::OpenText, 2);
    let mut single = cond_ids(1, ConditionOperator::Contains, &[9]);
    single.text_value = Some("anx".into());
    gated.show_if = Some(show_if(ConditionLogic::And, vec![single]));
    let sheet = questionnaire(vec![question(1, QuestionType::OpenText, 1), gated]);

    let mut answers = AnswerStore::new();
    answers.set(Answer::text(1, "anxiety"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);

    // Case-sensitive.
    answers.set(Answer::text(1, "ANXIETY"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1]);
}

#[test]
fn not_contains_accepts_a_text_only_payload() {
    let mut gated = question(2, QuestionType::OpenText, 2);
    gated.show_if = Some(show_if(
        ConditionLogic::And,
        vec![cond_text(1, ConditionOperator::NotContains, "sleep")],
    ));
    let sheet = questionnaire(vec![question(1, QuestionType::OpenText, 1), gated]);

    // No answer yet: vacuously true.
    let answers = AnswerStore::new();
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);

    let mut answers = AnswerStore::new();
    answers.set(Answer::text(1, "trouble sleeping"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);

    answers.set(Answer::text(1, "sleep issues"));
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1]);
}

#[test]
fn unknown_question_reference_takes_the_no_answer_branch() {
    let mut gated = question(2, QuestionType::OpenText, 2);
    gated.show_if = Some(show_if(
        ConditionLogic::And,
        vec![cond(404, ConditionOperator::Answered)],
    ));
    let mut shown = question(3, QuestionType::OpenText, 3);
    shown.show_if = Some(show_if(
        ConditionLogic::And,
        vec![cond(404, ConditionOperator::NotAnswered)],
    ));
    let sheet = questionnaire(vec![question(1, QuestionType::OpenText, 1), gated, shown]);

    let answers = AnswerStore::new();
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 3]);
}

#[test]
fn empty_condition_list_is_vacuous_per_logic() {
    let mut vacuous_and = question(2, QuestionType::OpenText, 2);
    vacuous_and.show_if = Some(show_if(ConditionLogic::And, vec![]));
    let mut vacuous_or = question(3, QuestionType::OpenText, 3);
    vacuous_or.show_if = Some(show_if(ConditionLogic::Or, vec![]));
    let sheet = questionnaire(vec![
        question(1, QuestionType::OpenText, 1),
        vacuous_and,
        vacuous_or,
    ]);

    let answers = AnswerStore::new();
    assert_eq!(ids(&visible_questions(&sheet, &answers)), vec![1, 2]);
}
