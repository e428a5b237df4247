
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Correct answer {id} is not one of the options")]
    UnknownCorrectAnswer { id: u32 },
    #[error("Answer id {id} is used more than once")]
    DuplicateAnswerId { id: u32 },
    #[error("A multiple choice question needs at least 2 options, got {count}")]
    TooFewOptions { count: usize },
    #[error("Time limit of {minutes} minutes is outside {min}..={max}", min = crate::model::MIN_TIME_LIMIT, max = crate::model::MAX_TIME_LIMIT)]
    TimeLimitOutOfRange { minutes: u32 },
    #[error("A mark of {mark} would push the exam total past {max}", max = u32::MAX)]
    MarksOverflow { mark: u32 },
    #[error("An exam needs at least one question")]
    NoQuestions,
    #[error("No exam has been created for this subject")]
    NoExam,
    #[error("Input closed")]
    InputClosed,
}

pub type ExamResult<T> = Result<T, Error>;
