use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::condition::QuestionCondition;

/// Identifier of a question, unique within a questionnaire.
pub type QuestionId = i64;

/// Identifier of an option, unique within its question.
pub type OptionId = i64;

/// Input widget a question is presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Free-form text.
    OpenText,
    /// Exactly one option, rendered as radio buttons.
    SingleChoice,
    /// Any number of options, rendered as checkboxes.
    MultipleChoice,
    /// Exactly one option, rendered as a dropdown list.
    Select,
}

impl QuestionType {
    /// True for the kinds answered with option ids rather than text.
    pub fn is_choice(&self) -> bool {
        !matches!(self, QuestionType::OpenText)
    }
}

/// A selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: OptionId,
    pub option_text: String,
    pub order: i64,
}

/// A single question within a questionnaire.
///
/// `order` defines the default display sequence; `show_if` gates visibility on
/// answers to earlier questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub question_text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub is_required: bool,
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<QuestionCondition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Looks up an option of this question by id.
    pub fn option(&self, id: OptionId) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.id == id)
    }
}
