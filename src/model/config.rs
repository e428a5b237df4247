use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, ExamResult};

use super::{Exam, ExamKind, Question, Subject, TimeLimit};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SubjectConfig {
    id: u32,
    name: String,
    exam: ExamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct ExamConfig {
    kind: ExamKind,
    /// Minutes.
    time_limit: u32,
    questions: Vec<QuestionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", deny_unknown_fields, rename_all = "kebab-case")]
enum QuestionConfig {
    TrueFalse {
        body: String,
        mark: u32,
        correct: u32,
    },
    Mcq {
        body: String,
        mark: u32,
        options: Vec<String>,
        correct: u32,
    },
}

impl SubjectConfig {
    pub fn from(path: &Path) -> ExamResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Builds the subject, running every question through the checked constructors.
    pub fn build(self) -> ExamResult<Subject> {
        let ExamConfig { kind, time_limit, questions } = self.exam;
        if questions.is_empty() {
            return Err(Error::NoQuestions);
        }
        let mut exam = Exam::new(kind, TimeLimit::from_minutes(time_limit)?);
        for question in questions {
            exam.add_question(match question {
                QuestionConfig::TrueFalse { body, mark, correct } => Question::true_false(body, mark, correct)?,
                QuestionConfig::Mcq { body, mark, options, correct } => Question::mcq_from_options(body, mark, options, correct)?,
            })?;
        }
        let mut subject = Subject::new(self.id, self.name);
        subject.create_exam(exam);
        Ok(subject)
    }
}

pub fn load_subject(path: &str) -> Result<Subject, String> {
    std::fs::canonicalize(path)
        .map_err(|_| format!("Could not find exam definition: {}\n", path))
        .and_then(|path| {
            SubjectConfig::from(&path)
                .and_then(SubjectConfig::build)
                .map_err(|e| format!("Could not import exam definition: {}\n", e))
        })
        .inspect(|subject| info!(%subject, "exam definition loaded"))
}

/// Programming, a 60 minute final with one question of each kind.
pub fn demo_subject() -> ExamResult<Subject> {
    let mut exam = Exam::new(ExamKind::Final, TimeLimit::from_minutes(60)?);
    exam.add_question(Question::true_false("C# is an object-oriented language?", 10, 1)?)?;
    exam.add_question(Question::mcq_from_options("C# was released in?", 10, ["1995", "2000", "2002"], 3)?)?;

    let mut subject = Subject::new(1, "Programming");
    subject.create_exam(exam);
    Ok(subject)
}
