use serde::Serialize;

use crate::answers::Answer;
use crate::spec::question::{OptionId, QuestionId, QuestionType};
use crate::stepper::Stepper;

/// Status labels exposed to presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// A question is on screen (or the visible sequence is empty).
    InProgress,
    /// The stepper reached its terminal state.
    Submitted,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::InProgress => "in_progress",
            StepStatus::Submitted => "submitted",
        }
    }
}

/// An option as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub id: OptionId,
    pub option_text: String,
    pub selected: bool,
}

/// The current question as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub question_text: String,
    pub kind: QuestionType,
    pub is_required: bool,
    pub help_text: Option<String>,
    pub options: Vec<OptionView>,
    pub current_text: Option<String>,
    pub error: Option<String>,
}

/// Presentation-neutral snapshot of the stepper for front ends.
#[derive(Debug, Clone, Serialize)]
pub struct StepPayload {
    pub title: String,
    pub description: Option<String>,
    pub status: StepStatus,
    /// One-based position within the visible sequence; 0 when it is empty.
    pub position: usize,
    pub total: usize,
    pub progress_percent: u8,
    pub question: Option<QuestionView>,
}

/// Builds the presenter snapshot for the stepper's current state.
pub fn build_step_payload(stepper: &Stepper) -> StepPayload {
    let visible = stepper.visible();
    let total = visible.len();
    let question = visible.get(stepper.index()).map(|question| {
        let answer = stepper.answers().get(question.id);
        let selected: &[OptionId] = answer
            .and_then(|answer: &Answer| answer.selected_option_ids.as_deref())
            .unwrap_or(&[]);
        QuestionView {
            id: question.id,
            question_text: question.question_text.clone(),
            kind: question.kind,
            is_required: question.is_required,
            help_text: question.help_text.clone(),
            options: question
                .options
                .iter()
                .map(|option| OptionView {
                    id: option.id,
                    option_text: option.option_text.clone(),
                    selected: selected.contains(&option.id),
                })
                .collect(),
            current_text: answer.and_then(|answer| answer.text_answer.clone()),
            error: stepper.error_for(question.id).map(str::to_string),
        }
    });

    let status = if stepper.is_submitted() {
        StepStatus::Submitted
    } else {
        StepStatus::InProgress
    };

    StepPayload {
        title: stepper.questionnaire().title.clone(),
        description: stepper.questionnaire().description.clone(),
        status,
        position: if total == 0 { 0 } else { stepper.index() + 1 },
        total,
        progress_percent: stepper.progress().round() as u8,
        question,
    }
}

/// Renders the snapshot as human-friendly text for terminal front ends.
pub fn render_text(payload: &StepPayload) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Question {} of {} ({}%)",
        payload.position, payload.total, payload.progress_percent
    ));

    match &payload.question {
        Some(question) => {
            let mut heading = question.question_text.clone();
            if question.is_required {
                heading.push_str(" *");
            }
            lines.push(heading);
            if let Some(help) = &question.help_text {
                lines.push(help.clone());
            }
            for (position, option) in question.options.iter().enumerate() {
                let marker = if option.selected { "x" } else { " " };
                lines.push(format!(
                    "  {}. [{}] {}",
                    position + 1,
                    marker,
                    option.option_text
                ));
            }
            if let Some(text) = &question.current_text {
                lines.push(format!("  Current answer: {}", text));
            }
            if let Some(error) = &question.error {
                lines.push(format!("  ! {}", error));
            }
        }
        None => lines.push("No questions available".to_string()),
    }

    lines.join("\n")
}
