use crate::answers::AnswerStore;
use crate::spec::question::{Question, QuestionId};
use crate::spec::questionnaire::Questionnaire;
use crate::visibility::visible_questions;

/// Message attached per question id when a required question blocks `next`.
pub const REQUIRED_MESSAGE: &str = "This question is required";

/// Decides whether a question's required constraint is satisfied.
///
/// Non-required questions always pass. A required question passes iff an
/// answer exists and carries content: present text (the empty string counts as
/// present) or a non-empty option set.
pub fn satisfies_required(question: &Question, answers: &AnswerStore) -> bool {
    if !question.is_required {
        return true;
    }
    answers
        .get(question.id)
        .is_some_and(|answer| answer.has_content())
}

/// Outcome of a whole-questionnaire required check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub missing_required: Vec<QuestionId>,
}

/// Checks the required constraint across all currently visible questions.
///
/// The required flag is only enforced while a question is visible; hidden
/// questions never count as missing.
pub fn validate(questionnaire: &Questionnaire, answers: &AnswerStore) -> ValidationResult {
    let missing_required: Vec<QuestionId> = visible_questions(questionnaire, answers)
        .into_iter()
        .filter(|question| !satisfies_required(question, answers))
        .map(|question| question.id)
        .collect();

    ValidationResult {
        valid: missing_required.is_empty(),
        missing_required,
    }
}
