
mod answer;
mod config;
mod exam;
mod question;
mod subject;

pub use answer::Answer;
pub use config::{SubjectConfig, demo_subject, load_subject};
pub use exam::{Exam, ExamKind, ExamOutcome, MAX_TIME_LIMIT, MIN_TIME_LIMIT, ReviewEntry, Scorecard, TimeLimit};
pub use question::{Question, QuestionKind};
pub use subject::Subject;
