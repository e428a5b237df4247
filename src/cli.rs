
#[macro_use]
mod print;
mod prompt;
mod setup;

pub use prompt::Console;
pub use setup::{build_exam, build_subject};

use std::io::{BufRead, Write};

use crate::error::ExamResult;
use crate::model::{ExamOutcome, Subject};

#[derive(Debug, Clone)]
pub struct Settings {
    pub subject_id: u32,
    pub subject_name: String,
    /// Ask before starting the exam.
    pub confirm: bool,
}

/// Sets up the subject unless one was loaded, then runs its exam.
/// Returns `None` when the operator declines to start.
pub fn start<R: BufRead, W: Write>(console: &mut Console<R, W>, subject: Option<Subject>, settings: &Settings)
    -> ExamResult<Option<ExamOutcome>>
{
    let subject = match subject {
        Some(subject) => subject,
        None => build_subject(console, settings.subject_id, &settings.subject_name)?,
    };

    console.say(format!("\n{}", subject))?;
    if settings.confirm && !console.yes_no("Do you want to start the exam?")? {
        console.say("Exam not started.")?;
        return Ok(None);
    }

    let (input, output) = console.parts();
    subject.run_exam(input, output).map(Some)
}
