use intake_spec::{
    Answer, Question, QuestionOption, QuestionType, Questionnaire, StepOutcome, StepStatus,
    Stepper, build_step_payload, render_text,
};

fn make_questionnaire() -> Questionnaire {
    Questionnaire {
        id: 9,
        title: "Welcome questionnaire".into(),
        description: Some("So we can tailor your experience".into()),
        is_active: true,
        is_required: false,
        questions: vec![
            Question {
                id: 1,
                question_text: "How are you feeling today?".into(),
                kind: QuestionType::SingleChoice,
                is_required: true,
                order: 1,
                help_text: Some("Pick the closest match".into()),
                show_if: None,
                options: vec![
                    QuestionOption {
                        id: 10,
                        option_text: "Fine".into(),
                        order: 1,
                    },
                    QuestionOption {
                        id: 11,
                        option_text: "Struggling".into(),
                        order: 2,
                    },
                ],
            },
            Question {
                id: 2,
                question_text: "Anything else?".into(),
                kind: QuestionType::OpenText,
                is_required: false,
                order: 2,
                help_text: None,
                show_if: None,
                options: vec![],
            },
        ],
    }
}

#[test]
fn payload_surfaces_the_required_error() {
    let mut stepper = Stepper::new(make_questionnaire());
    stepper.next().unwrap(); // blocks, records the required error

    let payload = build_step_payload(&stepper);
    assert_eq!(payload.status, StepStatus::InProgress);
    assert_eq!((payload.position, payload.total), (1, 2));
    assert_eq!(payload.progress_percent, 50);

    let question = payload.question.unwrap();
    assert_eq!(question.id, 1);
    assert_eq!(question.error.as_deref(), Some("This question is required"));
}

#[test]
fn payload_marks_selected_options_and_clears_the_error() {
    let mut stepper = Stepper::new(make_questionnaire());
    stepper.next().unwrap();
    stepper.answer(Answer::options(1, [11])).unwrap();

    let question = build_step_payload(&stepper).question.unwrap();
    assert_eq!(question.error, None);
    assert!(!question.options[0].selected);
    assert!(question.options[1].selected);
}

#[test]
fn payload_marks_submission() {
    let mut stepper = Stepper::new(make_questionnaire());
    stepper.answer(Answer::options(1, [10])).unwrap();
    stepper.next().unwrap();
    assert!(matches!(stepper.next(), Ok(StepOutcome::Submitted(_))));

    let payload = build_step_payload(&stepper);
    assert_eq!(payload.status, StepStatus::Submitted);
    assert_eq!(payload.status.as_str(), "submitted");
}

#[test]
fn text_rendering_lists_options_and_help() {
    let mut stepper = Stepper::new(make_questionnaire());
    stepper.answer(Answer::options(1, [10])).unwrap();

    let rendered = render_text(&build_step_payload(&stepper));
    assert!(rendered.contains("Question 1 of 2 (50%)"));
    assert!(rendered.contains("How are you feeling today? *"));
    assert!(rendered.contains("Pick the closest match"));
    assert!(rendered.contains("1. [x] Fine"));
    assert!(rendered.contains("2. [ ] Struggling"));
}

#[test]
fn text_rendering_handles_an_empty_sequence() {
    let mut empty = make_questionnaire();
    empty.questions.clear();
    let stepper = Stepper::new(empty);

    let payload = build_step_payload(&stepper);
    assert_eq!((payload.position, payload.total), (0, 0));
    assert_eq!(payload.progress_percent, 100);
    assert!(render_text(&payload).contains("No questions available"));
}
