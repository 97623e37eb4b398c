pub mod condition;
pub mod question;
pub mod questionnaire;

pub use condition::{ConditionLogic, ConditionOperator, QuestionCondition, SingleCondition};
pub use question::{OptionId, Question, QuestionId, QuestionOption, QuestionType};
pub use questionnaire::Questionnaire;
