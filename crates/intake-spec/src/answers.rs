use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::question::{OptionId, QuestionId};

/// Recorded answer to one question: free text or a set of selected options.
///
/// `selected_option_ids` has set semantics: duplicates collapse, insertion
/// order is kept for display, comparisons ignore order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_ids: Option<Vec<OptionId>>,
}

impl Answer {
    /// A free-text answer.
    pub fn text(question_id: QuestionId, text: impl Into<String>) -> Self {
        Self {
            question_id,
            text_answer: Some(text.into()),
            selected_option_ids: None,
        }
    }

    /// An option-set answer. Duplicate ids collapse, keeping first occurrence.
    pub fn options(question_id: QuestionId, ids: impl IntoIterator<Item = OptionId>) -> Self {
        let mut selected = Vec::new();
        for id in ids {
            if !selected.contains(&id) {
                selected.push(id);
            }
        }
        Self {
            question_id,
            text_answer: None,
            selected_option_ids: Some(selected),
        }
    }

    /// True when the answer carries content that satisfies a required
    /// question: any text (the empty string counts) or at least one option.
    pub fn has_content(&self) -> bool {
        self.text_answer.is_some()
            || self
                .selected_option_ids
                .as_ref()
                .is_some_and(|ids| !ids.is_empty())
    }
}

/// In-memory store of the answers recorded so far, at most one per question.
///
/// Iteration follows insertion order; replacing an answer keeps its original
/// position, matching the map the reference client accumulates answers in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerStore {
    entries: Vec<Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the answer keyed by its question id.
    pub fn set(&mut self, answer: Answer) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.question_id == answer.question_id)
        {
            Some(entry) => *entry = answer,
            None => self.entries.push(answer),
        }
    }

    /// The current answer for a question, if any.
    pub fn get(&self, question_id: QuestionId) -> Option<&Answer> {
        self.entries
            .iter()
            .find(|entry| entry.question_id == question_id)
    }

    /// All answers in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Answer> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the store, yielding the answers in insertion order.
    pub fn into_values(self) -> Vec<Answer> {
        self.entries
    }
}

impl FromIterator<Answer> for AnswerStore {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut store = Self::new();
        for answer in iter {
            store.set(answer);
        }
        store
    }
}

/// Handoff payload for the submission boundary, shaped like the body the
/// platform expects at `POST /user/questionnaire/submit`. The engine only
/// builds the value; transport lives elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSubmission {
    pub questionnaire_id: i64,
    pub answers: Vec<Answer>,
}
