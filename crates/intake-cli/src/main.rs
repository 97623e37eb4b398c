mod lint;
mod wizard;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use intake_spec::{
    Answer, AnswerStore, Questionnaire, QuestionnaireSubmission, StepOutcome, Stepper,
    build_step_payload, validate,
};
use lint::lint;
use wizard::{Verbosity, WizardPresenter, parse_answer};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Terminal front end for intake questionnaires",
    long_about = "Runs intake questionnaires as a terminal wizard and provides validate, lint, and schema helpers for questionnaire definitions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk a questionnaire interactively and print the submission payload.
    Run {
        /// Path to the questionnaire JSON.
        #[arg(long, value_name = "QUESTIONNAIRE")]
        questionnaire: PathBuf,
        /// Optional JSON file with answers recorded in an earlier session.
        #[arg(long, value_name = "ANSWERS")]
        answers: Option<PathBuf>,
        /// Show verbose output (status lines, parse expectations).
        #[arg(long, alias = "debug")]
        verbose: bool,
        /// Pretty-print the submission payload.
        #[arg(long)]
        pretty: bool,
    },
    /// Check recorded answers against a questionnaire's required questions.
    Validate {
        /// Path to the questionnaire JSON.
        #[arg(long, value_name = "QUESTIONNAIRE")]
        questionnaire: PathBuf,
        /// Path to the answers JSON (array of answer objects).
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
    },
    /// Check a questionnaire definition for authoring mistakes.
    Lint {
        /// Path to the questionnaire JSON.
        #[arg(long, value_name = "QUESTIONNAIRE")]
        questionnaire: PathBuf,
    },
    /// Print the questionnaire JSON Schema.
    Schema,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            questionnaire,
            answers,
            verbose,
            pretty,
        } => run_wizard(questionnaire, answers, verbose, pretty),
        Command::Validate {
            questionnaire,
            answers,
        } => run_validate(questionnaire, answers),
        Command::Lint { questionnaire } => run_lint(questionnaire),
        Command::Schema => run_schema(),
    }
}

fn load_questionnaire(path: &PathBuf) -> CliResult<Questionnaire> {
    let contents = fs::read_to_string(path)?;
    let mut questionnaire: Questionnaire = serde_json::from_str(&contents)?;
    questionnaire.normalize();
    Ok(questionnaire)
}

fn load_answers(path: &PathBuf) -> CliResult<AnswerStore> {
    let contents = fs::read_to_string(path)?;
    let answers: Vec<Answer> = serde_json::from_str(&contents)?;
    Ok(answers.into_iter().collect())
}

fn run_wizard(
    questionnaire_path: PathBuf,
    answers_path: Option<PathBuf>,
    verbose: bool,
    pretty: bool,
) -> CliResult<()> {
    let questionnaire = load_questionnaire(&questionnaire_path)?;
    if !questionnaire.is_active {
        return Err(format!("questionnaire '{}' is not active", questionnaire.title).into());
    }
    let questionnaire_id = questionnaire.id;

    let answers = match &answers_path {
        Some(path) => load_answers(path)?,
        None => AnswerStore::new(),
    };

    let mut stepper = Stepper::with_answers(questionnaire, answers);
    let mut presenter = WizardPresenter::new(Verbosity::from_verbose(verbose), pretty);

    loop {
        let payload = build_step_payload(&stepper);
        presenter.show_header(&payload);
        presenter.show_step(&payload);

        let Some(question) = stepper.current_question().cloned() else {
            // Nothing visible to answer; skipping is the only way forward.
            return match stepper.skip() {
                Ok(answers) => {
                    presenter.show_completion(&submission(questionnaire_id, answers));
                    Ok(())
                }
                Err(err) => Err(format!("no visible questions to answer: {}", err).into()),
            };
        };

        print!("> ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err("input closed before the questionnaire was finished".into());
        }
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("exit") {
            return Err("wizard aborted by user".into());
        }
        if trimmed.eq_ignore_ascii_case("back") {
            stepper.previous()?;
            continue;
        }
        if trimmed.eq_ignore_ascii_case("skip") {
            match stepper.skip() {
                Ok(answers) => {
                    presenter.show_completion(&submission(questionnaire_id, answers));
                    return Ok(());
                }
                Err(err) => {
                    eprintln!("Cannot skip: {}", err);
                    continue;
                }
            }
        }

        match parse_answer(&question, trimmed) {
            Ok(Some(answer)) => stepper.answer(answer)?,
            Ok(None) => {}
            Err(err) => {
                presenter.show_parse_error(&err);
                continue;
            }
        }

        if let StepOutcome::Submitted(answers) = stepper.next()? {
            presenter.show_completion(&submission(questionnaire_id, answers));
            return Ok(());
        }
    }
}

fn submission(questionnaire_id: i64, answers: Vec<Answer>) -> QuestionnaireSubmission {
    QuestionnaireSubmission {
        questionnaire_id,
        answers,
    }
}

fn run_validate(questionnaire_path: PathBuf, answers_path: PathBuf) -> CliResult<()> {
    let questionnaire = load_questionnaire(&questionnaire_path)?;
    let answers = load_answers(&answers_path)?;

    let result = validate(&questionnaire, &answers);
    println!(
        "Validation result: {}",
        if result.valid { "valid" } else { "invalid" }
    );
    if !result.missing_required.is_empty() {
        let missing: Vec<String> = result
            .missing_required
            .iter()
            .map(|id| id.to_string())
            .collect();
        println!("Missing required answers: {}", missing.join(", "));
    }

    if result.valid {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}

fn run_lint(questionnaire_path: PathBuf) -> CliResult<()> {
    let questionnaire = load_questionnaire(&questionnaire_path)?;
    let issues = lint(&questionnaire);

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }
    for issue in &issues {
        println!("{}", issue);
    }
    Err(format!("{} lint issue(s) found", issues.len()).into())
}

fn run_schema() -> CliResult<()> {
    let schema = schemars::schema_for!(Questionnaire);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
