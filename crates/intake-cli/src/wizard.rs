use intake_spec::{
    Answer, Question, QuestionType, QuestionnaireSubmission, StepPayload, render_text,
};

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: question prompts only.
    Clean,
    /// Verbose output: status lines, visible questions, parse expectations.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Prints questionnaire state as the stepper yields questions.
pub struct WizardPresenter {
    verbosity: Verbosity,
    header_printed: bool,
    pretty_submission: bool,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity, pretty_submission: bool) -> Self {
        Self {
            verbosity,
            header_printed: false,
            pretty_submission,
        }
    }

    pub fn show_header(&mut self, payload: &StepPayload) {
        if self.header_printed {
            return;
        }
        println!("{}", payload.title);
        if let Some(description) = &payload.description {
            println!("{}", description);
        }
        self.header_printed = true;
    }

    pub fn show_step(&self, payload: &StepPayload) {
        if self.verbosity.is_verbose() {
            println!(
                "Status: {} ({}/{}, {}%)",
                payload.status.as_str(),
                payload.position,
                payload.total,
                payload.progress_percent
            );
        }
        println!("{}", render_text(payload));
    }

    pub fn show_parse_error(&self, error: &AnswerParseError) {
        eprintln!("Invalid answer: {}", error.user_message);
        if self.verbosity.is_verbose()
            && let Some(debug) = &error.debug_message
        {
            eprintln!("  Expected: {}", debug);
        }
    }

    pub fn show_completion(&self, submission: &QuestionnaireSubmission) {
        println!("Questionnaire complete.");
        let encoded = if self.pretty_submission {
            serde_json::to_string_pretty(submission)
        } else {
            serde_json::to_string(submission)
        };
        match encoded {
            Ok(body) => println!("{}", body),
            Err(err) => eprintln!("Failed to serialize submission: {}", err),
        }
    }
}

/// Error produced when parsing an answer typed by the user.
#[derive(Debug)]
pub struct AnswerParseError {
    pub user_message: String,
    pub debug_message: Option<String>,
}

impl AnswerParseError {
    pub fn new(user_message: impl Into<String>, debug_message: Option<String>) -> Self {
        Self {
            user_message: user_message.into(),
            debug_message,
        }
    }
}

/// Parses a line of input into an answer for the given question.
///
/// Choice questions are answered by 1-based option number as printed;
/// multiple choice accepts a comma-separated list of numbers. An empty line
/// means "leave unanswered" and maps to `None`.
pub fn parse_answer(question: &Question, raw: &str) -> Result<Option<Answer>, AnswerParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match question.kind {
        QuestionType::OpenText => Ok(Some(Answer::text(question.id, trimmed))),
        QuestionType::SingleChoice | QuestionType::Select => {
            let option_id = parse_option_number(question, trimmed)?;
            Ok(Some(Answer::options(question.id, [option_id])))
        }
        QuestionType::MultipleChoice => {
            let mut option_ids = Vec::new();
            for part in trimmed.split(',') {
                option_ids.push(parse_option_number(question, part.trim())?);
            }
            Ok(Some(Answer::options(question.id, option_ids)))
        }
    }
}

fn parse_option_number(question: &Question, raw: &str) -> Result<i64, AnswerParseError> {
    let number: usize = raw.parse().map_err(|_| {
        AnswerParseError::new(
            format!("'{}' is not an option number", raw),
            Some(format!("a number between 1 and {}", question.options.len())),
        )
    })?;
    question
        .options
        .get(number.wrapping_sub(1))
        .map(|option| option.id)
        .ok_or_else(|| {
            AnswerParseError::new(
                format!("option {} does not exist", number),
                Some(format!("a number between 1 and {}", question.options.len())),
            )
        })
}
