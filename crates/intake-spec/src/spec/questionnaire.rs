use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::question::{Question, QuestionId};

fn default_true() -> bool {
    true
}

/// Top-level questionnaire definition as served by the platform.
///
/// Server bookkeeping fields (`createdAt`, `updatedAt`) are ignored on
/// deserialize. Well-formedness preconditions the engine assumes but does not
/// enforce: question ids are unique, and every `show_if` condition references
/// a question that occurs strictly earlier in display order. The CLI `lint`
/// command checks both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_required: bool,
    pub questions: Vec<Question>,
}

impl Questionnaire {
    /// Sorts questions and their options into display order.
    ///
    /// Payloads are usually pre-sorted by the server, but the engine walks
    /// `questions` in slice order, so loaders call this to make the display
    /// sequence explicit.
    pub fn normalize(&mut self) {
        self.questions.sort_by_key(|question| question.order);
        for question in &mut self.questions {
            question.options.sort_by_key(|option| option.order);
        }
    }

    /// Looks up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }
}
