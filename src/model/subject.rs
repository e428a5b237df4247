use std::io::{BufRead, Write};

use crate::error::{Error, ExamResult};

use super::{Exam, ExamOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    id: u32,
    name: String,
    exam: Option<Exam>,
}

impl Subject {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Subject { id, name: name.into(), exam: None }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exam(&self) -> Option<&Exam> {
        self.exam.as_ref()
    }

    /// Attaches `exam`, replacing any exam created before.
    pub fn create_exam(&mut self, exam: Exam) {
        self.exam = Some(exam);
    }

    pub fn run_exam<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> ExamResult<ExamOutcome> {
        self.exam.as_ref().ok_or(Error::NoExam)?.run(input, out)
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Subject: {} (ID: {})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::model::{ExamKind, Question, TimeLimit};

    fn exam(kind: ExamKind) -> Exam {
        let mut exam = Exam::new(kind, TimeLimit::from_minutes(45).unwrap());
        exam.add_question(Question::true_false("Tabs over spaces?", 2, 2).unwrap()).unwrap();
        exam
    }

    #[test]
    fn displays_identity() {
        assert_eq!(Subject::new(7, "Compilers").to_string(), "Subject: Compilers (ID: 7)");
    }

    #[test]
    fn running_without_exam_fails() {
        let subject = Subject::new(1, "Programming");
        let result = subject.run_exam(&mut Cursor::new("1\n"), &mut Vec::new());
        assert!(matches!(result, Err(Error::NoExam)));
    }

    #[test]
    fn create_exam_replaces_previous() {
        let mut subject = Subject::new(1, "Programming");
        subject.create_exam(exam(ExamKind::Final));
        subject.create_exam(exam(ExamKind::Practical));
        assert_eq!(subject.exam().map(|e| e.kind()), Some(ExamKind::Practical));

        let outcome = subject.run_exam(&mut Cursor::new("2\n"), &mut Vec::new()).unwrap();
        assert_eq!(outcome, ExamOutcome::Revealed { questions: 1 });
    }
}
