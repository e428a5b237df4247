use std::cmp::Ordering;
use std::io::Write;

use crate::error::{Error, ExamResult};

use super::Answer;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    TrueFalse,
    Mcq,
}

impl QuestionKind {
    pub fn header(&self) -> &'static str {
        match self {
            QuestionKind::TrueFalse => "True/False",
            QuestionKind::Mcq => "MCQ",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// A question with its options and the id of the correct one.
///
/// Constructors guarantee that `correct` indexes into `answers`
/// and that answer ids are unique. Cloning copies the whole option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    kind: QuestionKind,
    body: String,
    mark: u32,
    answers: Vec<Answer>,
    correct: usize,
}

impl Question {
    /// The fixed options of every true/false question.
    pub fn true_false_answers() -> Vec<Answer> {
        vec![Answer::new(1, "True"), Answer::new(2, "False")]
    }

    pub fn true_false(body: impl Into<String>, mark: u32, correct: u32) -> ExamResult<Self> {
        Self::build(QuestionKind::TrueFalse, body.into(), mark, Self::true_false_answers(), correct)
    }

    pub fn mcq(body: impl Into<String>, mark: u32, answers: Vec<Answer>, correct: u32) -> ExamResult<Self> {
        if answers.len() < 2 {
            return Err(Error::TooFewOptions { count: answers.len() });
        }
        Self::build(QuestionKind::Mcq, body.into(), mark, answers, correct)
    }

    /// Numbers the option texts 1..=n in order.
    pub fn mcq_from_options<S: Into<String>>(
        body: impl Into<String>,
        mark: u32,
        options: impl IntoIterator<Item = S>,
        correct: u32,
    ) -> ExamResult<Self> {
        let answers = options.into_iter()
            .zip(1..)
            .map(|(text, id)| Answer::new(id, text))
            .collect();
        Self::mcq(body, mark, answers, correct)
    }

    fn build(kind: QuestionKind, body: String, mark: u32, answers: Vec<Answer>, correct: u32) -> ExamResult<Self> {
        for (i, answer) in answers.iter().enumerate() {
            if answers[..i].iter().any(|a| a.id() == answer.id()) {
                return Err(Error::DuplicateAnswerId { id: answer.id() });
            }
        }
        let correct = answers.iter()
            .position(|a| a.id() == correct)
            .ok_or(Error::UnknownCorrectAnswer { id: correct })?;
        Ok(Question { kind, body, mark, answers, correct })
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn header(&self) -> &'static str {
        self.kind.header()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn mark(&self) -> u32 {
        self.mark
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn answer(&self, id: u32) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id() == id)
    }

    pub fn correct_answer(&self) -> &Answer {
        &self.answers[self.correct]
    }

    pub fn is_correct(&self, id: u32) -> bool {
        self.correct_answer().id() == id
    }

    /// Ascending by mark.
    pub fn cmp_by_mark(&self, other: &Question) -> Ordering {
        self.mark.cmp(&other.mark)
    }

    pub fn show<W: Write>(&self, out: &mut W) -> ExamResult<()> {
        writeln!(out, "{}", self)?;
        Ok(())
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {} (Mark: {})", self.header(), self.body, self.mark)?;
        for answer in &self.answers {
            write!(f, "\n{}", answer)?;
        }
        Ok(())
    }
}
