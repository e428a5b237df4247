use std::process::ExitCode;

use clap::Parser;
use exam::cli::{self, Console, Settings};
use exam::model::{self, Subject};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};


/// A console examination tool
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct AppArgs {
    /// Load the subject and its exam from a json definition instead of asking for it.
    #[arg(long = "config", value_name = "FILE")]
    config: Option<String>,
    /// Use the built-in sample subject.
    #[arg(long = "demo", conflicts_with = "config")]
    demo: bool,
    /// Id of the subject created interactively.
    #[arg(long = "subject-id", default_value_t = 1)]
    subject_id: u32,
    /// Name of the subject created interactively.
    #[arg(long = "subject-name", default_value = "Programming")]
    subject_name: String,
    /// Start the exam without asking for confirmation.
    #[arg(short = 'y', long = "yes")]
    yes: bool,
}

fn init() -> Result<(Option<Subject>, Settings), String> {
    let args = AppArgs::parse();

    let subject = match (&args.config, args.demo) {
        (Some(path), _) => Some(model::load_subject(path)?),
        (None, true) => Some(model::demo_subject().map_err(|e| e.to_string())?),
        (None, false) => None,
    };
    Ok((subject, Settings {
        subject_id: args.subject_id,
        subject_name: args.subject_name,
        confirm: !args.yes,
    }))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let (subject, settings) = match init() {
        Ok(init) => init,
        Err(e) => {
            println!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout());
    match cli::start(&mut console, subject, &settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("exam aborted: {}", e);
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
