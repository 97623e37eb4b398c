#![allow(missing_docs)]

pub mod answers;
pub mod render;
pub mod spec;
pub mod stepper;
pub mod validate;
pub mod visibility;

pub use answers::{Answer, AnswerStore, QuestionnaireSubmission};
pub use render::{
    OptionView, QuestionView, StepPayload, StepStatus, build_step_payload, render_text,
};
pub use spec::{
    ConditionLogic, ConditionOperator, OptionId, Question, QuestionCondition, QuestionId,
    QuestionOption, QuestionType, Questionnaire, SingleCondition,
};
pub use stepper::{StepOutcome, Stepper, StepperError};
pub use validate::{REQUIRED_MESSAGE, ValidationResult, satisfies_required, validate};
pub use visibility::{condition_holds, visible_questions};
