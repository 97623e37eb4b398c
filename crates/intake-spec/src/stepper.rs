use std::collections::BTreeMap;
use std::mem;

use thiserror::Error;

use crate::answers::{Answer, AnswerStore};
use crate::spec::question::{Question, QuestionId};
use crate::spec::questionnaire::Questionnaire;
use crate::validate::{REQUIRED_MESSAGE, satisfies_required};
use crate::visibility::visible_questions;

/// Raised when the caller drives the stepper outside its state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepperError {
    #[error("questionnaire was already submitted")]
    AlreadySubmitted,
    #[error("a required questionnaire cannot be skipped")]
    SkipRequired,
    #[error("skip is only available from the first question")]
    SkipNotAtStart,
}

/// Result of a `next` transition.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Position unchanged: validation failed (an error is now recorded for
    /// the current question) or there was no question to advance from.
    Stayed,
    /// Moved to the next visible question.
    Advanced,
    /// Reached the end; the recorded answers are handed off in insertion
    /// order and the stepper is terminal from here on.
    Submitted(Vec<Answer>),
}

/// Walks a questionnaire one visible question at a time.
///
/// The stepper owns the answer store and an index into the visible-question
/// sequence, which is recomputed after every answer change. Validation errors
/// are kept per question id and surfaced through `error_for`. Submission (via
/// `next` on the last question, or `skip`) is terminal: the answers are moved
/// out and any further transition is an `AlreadySubmitted` error.
#[derive(Debug, Clone)]
pub struct Stepper {
    questionnaire: Questionnaire,
    answers: AnswerStore,
    index: usize,
    errors: BTreeMap<QuestionId, String>,
    submitted: bool,
}

impl Stepper {
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            answers: AnswerStore::new(),
            index: 0,
            errors: BTreeMap::new(),
            submitted: false,
        }
    }

    /// Starts a stepper with answers recorded in an earlier session.
    pub fn with_answers(questionnaire: Questionnaire, answers: AnswerStore) -> Self {
        let mut stepper = Self::new(questionnaire);
        stepper.answers = answers;
        stepper
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Zero-based position within the visible sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// The currently visible questions, in display order.
    pub fn visible(&self) -> Vec<&Question> {
        visible_questions(&self.questionnaire, &self.answers)
    }

    /// The question at the current position, if the visible sequence is
    /// non-empty.
    pub fn current_question(&self) -> Option<&Question> {
        self.visible().get(self.index).copied()
    }

    /// The validation error recorded for a question, if any.
    pub fn error_for(&self, question_id: QuestionId) -> Option<&str> {
        self.errors.get(&question_id).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<QuestionId, String> {
        &self.errors
    }

    /// Progress through the visible sequence as a percentage; 100 when the
    /// sequence is empty. Rounding is left to the presenter.
    pub fn progress(&self) -> f64 {
        let total = self.visible().len();
        if total == 0 {
            100.0
        } else {
            (self.index + 1) as f64 / total as f64 * 100.0
        }
    }

    /// Records an answer, clears that question's error, and re-clamps the
    /// position against the recomputed visible sequence: to the last index
    /// when the sequence shrank past the cursor, to 0 when it became empty.
    pub fn answer(&mut self, answer: Answer) -> Result<(), StepperError> {
        if self.submitted {
            return Err(StepperError::AlreadySubmitted);
        }
        self.errors.remove(&answer.question_id);
        self.answers.set(answer);

        let total = visible_questions(&self.questionnaire, &self.answers).len();
        if total == 0 {
            self.index = 0;
        } else if self.index >= total {
            self.index = total - 1;
        }
        Ok(())
    }

    /// Validates the current question and advances, submitting from the last
    /// visible question. A required question without content blocks with
    /// `REQUIRED_MESSAGE` recorded under its id.
    pub fn next(&mut self) -> Result<StepOutcome, StepperError> {
        if self.submitted {
            return Err(StepperError::AlreadySubmitted);
        }
        let visible = visible_questions(&self.questionnaire, &self.answers);
        let Some(question) = visible.get(self.index) else {
            return Ok(StepOutcome::Stayed);
        };
        let question_id = question.id;

        if !satisfies_required(question, &self.answers) {
            self.errors.insert(question_id, REQUIRED_MESSAGE.to_string());
            return Ok(StepOutcome::Stayed);
        }
        self.errors.remove(&question_id);

        if self.index + 1 >= visible.len() {
            self.submitted = true;
            let answers = mem::take(&mut self.answers).into_values();
            Ok(StepOutcome::Submitted(answers))
        } else {
            self.index += 1;
            Ok(StepOutcome::Advanced)
        }
    }

    /// Steps back one visible question, clamped at the start. Runs no
    /// validation and leaves recorded errors untouched.
    pub fn previous(&mut self) -> Result<(), StepperError> {
        if self.submitted {
            return Err(StepperError::AlreadySubmitted);
        }
        self.index = self.index.saturating_sub(1);
        Ok(())
    }

    /// Abandons the walk and hands off whatever was recorded, possibly
    /// nothing. Only available from the first question of a questionnaire
    /// that is not itself required.
    pub fn skip(&mut self) -> Result<Vec<Answer>, StepperError> {
        if self.submitted {
            return Err(StepperError::AlreadySubmitted);
        }
        if self.questionnaire.is_required {
            return Err(StepperError::SkipRequired);
        }
        if self.index != 0 {
            return Err(StepperError::SkipNotAtStart);
        }
        self.submitted = true;
        Ok(mem::take(&mut self.answers).into_values())
    }
}
