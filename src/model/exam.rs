use std::io::{BufRead, Write};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tabular::{Row, Table};
use tracing::{debug, info};

use crate::error::{Error, ExamResult};

use super::{Answer, Question};

pub const MIN_TIME_LIMIT: u32 = 30;
pub const MAX_TIME_LIMIT: u32 = 180;

const NO_ANSWER: &str = "Invalid or no answer provided";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExamKind {
    Final,
    Practical,
}

impl ExamKind {
    pub fn title(&self) -> &'static str {
        match self {
            ExamKind::Final => "Final Exam",
            ExamKind::Practical => "Practical Exam",
        }
    }
}

impl std::fmt::Display for ExamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// How long the exam is meant to take. Shown to the candidate, never enforced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeLimit(Duration);

impl TimeLimit {
    pub fn from_minutes(minutes: u32) -> ExamResult<Self> {
        if (MIN_TIME_LIMIT..=MAX_TIME_LIMIT).contains(&minutes) {
            Ok(TimeLimit(Duration::from_secs(u64::from(minutes) * 60)))
        } else {
            Err(Error::TimeLimitOutOfRange { minutes })
        }
    }

    pub fn minutes(&self) -> u32 {
        (self.0.as_secs() / 60) as u32
    }

    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl std::fmt::Display for TimeLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} minutes", self.minutes())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub question: String,
    pub mark: u32,
    pub correct: Answer,
    pub given: Option<Answer>,
}

impl ReviewEntry {
    pub fn is_correct(&self) -> bool {
        self.given.as_ref().is_some_and(|a| a.id() == self.correct.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    pub score: u32,
    pub total: u32,
    pub entries: Vec<ReviewEntry>,
}

impl Scorecard {
    pub fn review_table(&self) -> Table {
        let mut table = Table::new("\t{:<}\t{:<}\t{:<}")
            .with_heading("Review:")
            .with_row(Row::new()
                .with_cell("Question")
                .with_cell("Correct answer")
                .with_cell("Your answer"));
        for entry in &self.entries {
            table.add_row(Row::new()
                .with_cell(&entry.question)
                .with_cell(entry.correct.text())
                .with_cell(entry.given.as_ref().map(|a| a.text()).unwrap_or(NO_ANSWER)));
        }
        table
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamOutcome {
    Scored(Scorecard),
    Revealed { questions: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    kind: ExamKind,
    time_limit: TimeLimit,
    questions: Vec<Question>,
}

impl Exam {
    pub fn new(kind: ExamKind, time_limit: TimeLimit) -> Self {
        Exam { kind, time_limit, questions: Vec::new() }
    }

    pub fn kind(&self) -> ExamKind {
        self.kind
    }

    pub fn time_limit(&self) -> TimeLimit {
        self.time_limit
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Fails when the marks of all questions would no longer fit a `u32`.
    pub fn add_question(&mut self, question: Question) -> ExamResult<()> {
        if self.total_marks().checked_add(question.mark()).is_none() {
            return Err(Error::MarksOverflow { mark: question.mark() });
        }
        self.questions.push(question);
        Ok(())
    }

    /// Largest mark `add_question` still accepts.
    pub fn remaining_marks(&self) -> u32 {
        u32::MAX - self.total_marks()
    }

    pub fn total_marks(&self) -> u32 {
        self.questions.iter().map(|q| q.mark()).sum()
    }

    pub fn questions_by_mark(&self) -> Vec<&Question> {
        let mut questions: Vec<_> = self.questions.iter().collect();
        questions.sort_by(|a, b| a.cmp_by_mark(b));
        questions
    }

    /// Presents every question in order and reads one answer line for each.
    /// Lines that are not the id of an option count as no answer.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> ExamResult<ExamOutcome> {
        info!(kind = %self.kind, questions = self.questions.len(), time_limit = self.time_limit.minutes(), "exam started");
        writeln!(out, "=== {} ===", self.kind)?;
        writeln!(out, "Time limit: {}", self.time_limit)?;
        match self.kind {
            ExamKind::Final => self.run_final(input, out).map(ExamOutcome::Scored),
            ExamKind::Practical => self.run_practical(input, out),
        }
    }

    fn run_final<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> ExamResult<Scorecard> {
        let mut score = 0;
        let mut entries = Vec::with_capacity(self.questions.len());
        for (index, question) in self.questions.iter().enumerate() {
            let given = collect_answer(question, input, out)?;
            if given.is_some_and(|a| question.is_correct(a.id())) {
                score += question.mark();
            }
            debug!(index, answer = ?given.map(|a| a.id()), "answer recorded");
            entries.push(ReviewEntry {
                question: question.body().to_string(),
                mark: question.mark(),
                correct: question.correct_answer().clone(),
                given: given.cloned(),
            });
        }
        let card = Scorecard { score, total: self.total_marks(), entries };

        info!(score = card.score, total = card.total, "exam finished");
        writeln!(out)?;
        writeln!(out, "Your grade is {}/{}", card.score, card.total)?;
        writeln!(out, "{}", card.review_table())?;
        Ok(card)
    }

    fn run_practical<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> ExamResult<ExamOutcome> {
        for question in &self.questions {
            collect_answer(question, input, out)?;
            writeln!(out, "Correct Answer: {}", question.correct_answer().text())?;
        }
        info!(questions = self.questions.len(), "practice finished");
        Ok(ExamOutcome::Revealed { questions: self.questions.len() })
    }
}

fn collect_answer<'q, R: BufRead, W: Write>(question: &'q Question, input: &mut R, out: &mut W)
    -> ExamResult<Option<&'q Answer>>
{
    writeln!(out)?;
    question.show(out)?;
    prompt!(out, "Enter your answer: ");
    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;
    let line = String::from_utf8_lossy(&buf);
    let line = line.trim();
    let answer = line.parse::<u32>().ok().and_then(|id| question.answer(id));
    if answer.is_none() {
        debug!(input = line, "no valid answer given");
    }
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn exam(kind: ExamKind, questions: Vec<Question>) -> Exam {
        let mut exam = Exam::new(kind, TimeLimit::from_minutes(60).unwrap());
        for q in questions {
            exam.add_question(q).unwrap();
        }
        exam
    }

    fn true_false_exam() -> Exam {
        exam(ExamKind::Final, vec![Question::true_false("Rust is memory safe?", 10, 1).unwrap()])
    }

    fn run(exam: &Exam, input: &str) -> (ExamOutcome, String) {
        let mut out = Vec::new();
        let outcome = exam.run(&mut Cursor::new(input), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn scorecard(outcome: ExamOutcome) -> Scorecard {
        match outcome {
            ExamOutcome::Scored(card) => card,
            other => panic!("expected a scorecard, got {:?}", other),
        }
    }

    #[test]
    fn time_limit_range() {
        assert!(TimeLimit::from_minutes(29).is_err());
        assert!(TimeLimit::from_minutes(181).is_err());
        assert_eq!(TimeLimit::from_minutes(30).unwrap().minutes(), 30);
        assert_eq!(TimeLimit::from_minutes(180).unwrap().duration(), Duration::from_secs(180 * 60));
    }

    #[test]
    fn correct_answer_scores_full_mark() {
        let (outcome, output) = run(&true_false_exam(), "1\n");
        let card = scorecard(outcome);
        assert_eq!((card.score, card.total), (10, 10));
        assert!(output.contains("Your grade is 10/10"));
        assert!(output.starts_with("=== Final Exam ===\nTime limit: 60 minutes\n"));
    }

    #[test]
    fn wrong_answer_is_reviewed() {
        let (outcome, output) = run(&true_false_exam(), "2\n");
        let card = scorecard(outcome);
        assert_eq!((card.score, card.total), (0, 10));
        assert!(output.contains("Your grade is 0/10"));
        let row = output.lines()
            .find(|l| l.starts_with('\t') && l.contains("Rust is memory safe?"))
            .unwrap();
        assert_eq!(row.split_whitespace().collect::<Vec<_>>(), ["Rust", "is", "memory", "safe?", "True", "False"]);
        let entry = &card.entries[0];
        assert_eq!(entry.correct.text(), "True");
        assert_eq!(entry.given.as_ref().map(|a| a.text()), Some("False"));
        assert!(!entry.is_correct());
    }

    #[test]
    fn unparseable_answer_counts_as_no_answer() {
        let (outcome, output) = run(&true_false_exam(), "abc\n");
        let card = scorecard(outcome);
        assert_eq!(card.score, 0);
        assert_eq!(card.entries[0].given, None);
        assert!(output.contains("Your grade is 0/10"));
        assert!(output.contains(NO_ANSWER));
    }

    #[test]
    fn unmatched_id_and_closed_input_count_as_no_answer() {
        let exam = exam(ExamKind::Final, vec![
            Question::true_false("a", 4, 1).unwrap(),
            Question::true_false("b", 6, 2).unwrap(),
        ]);
        let card = scorecard(run(&exam, "7\n").0);
        assert_eq!(card.score, 0);
        assert_eq!(card.entries.len(), 2);
        assert!(card.entries.iter().all(|e| e.given.is_none()));
    }

    #[test]
    fn score_never_exceeds_total() {
        let exam = exam(ExamKind::Final, vec![
            Question::true_false("a", 4, 1).unwrap(),
            Question::mcq_from_options("b", 6, ["x", "y", "z"], 3).unwrap(),
            Question::true_false("c", 0, 2).unwrap(),
        ]);
        let picks = ["1", "2", "3", "0", "-1", "", "x"];
        for a in picks {
            for b in picks {
                for c in picks {
                    let card = scorecard(run(&exam, &format!("{a}\n{b}\n{c}\n")).0);
                    let expected = (if a == "1" { 4 } else { 0 }) + (if b == "3" { 6 } else { 0 });
                    assert_eq!(card.score, expected);
                    assert_eq!(card.total, 10);
                    assert!(card.score <= card.total);
                }
            }
        }
    }

    #[test]
    fn rejects_marks_beyond_u32() {
        let mut exam = Exam::new(ExamKind::Final, TimeLimit::from_minutes(60).unwrap());
        exam.add_question(Question::true_false("a", u32::MAX, 1).unwrap()).unwrap();
        assert_eq!(exam.remaining_marks(), 0);
        let err = exam.add_question(Question::true_false("b", 1, 1).unwrap()).unwrap_err();
        assert!(matches!(err, Error::MarksOverflow { mark: 1 }));
        exam.add_question(Question::true_false("c", 0, 1).unwrap()).unwrap();

        let card = scorecard(run(&exam, "1\n1\n").0);
        assert_eq!((card.score, card.total), (u32::MAX, u32::MAX));
    }

    #[test]
    fn undecodable_answer_counts_as_no_answer() {
        let exam = exam(ExamKind::Final, vec![
            Question::true_false("a", 10, 1).unwrap(),
            Question::true_false("b", 10, 1).unwrap(),
        ]);
        let mut out = Vec::new();
        let outcome = exam.run(&mut Cursor::new(&b"\xff\xfe\n1\n"[..]), &mut out).unwrap();
        let card = scorecard(outcome);
        assert_eq!((card.score, card.total), (10, 20));
        assert_eq!(card.entries[0].given, None);
        assert!(String::from_utf8(out).unwrap().contains(NO_ANSWER));
    }

    #[test]
    fn practical_reveals_without_scoring() {
        let exam = exam(ExamKind::Practical, vec![
            Question::mcq_from_options("C# was released in?", 10, ["1995", "2000", "2002"], 3).unwrap(),
        ]);
        for input in ["1\n", "3\n", "nope\n", ""] {
            let (outcome, output) = run(&exam, input);
            assert_eq!(outcome, ExamOutcome::Revealed { questions: 1 });
            assert!(output.starts_with("=== Practical Exam ==="));
            assert!(output.contains("Correct Answer: 2002"));
            assert!(!output.contains("grade"));
        }
    }

    #[test]
    fn sorts_questions_by_mark() {
        let exam = exam(ExamKind::Final, vec![
            Question::true_false("high", 9, 1).unwrap(),
            Question::true_false("low", 1, 1).unwrap(),
            Question::true_false("mid", 5, 1).unwrap(),
        ]);
        let bodies: Vec<_> = exam.questions_by_mark().iter().map(|q| q.body()).collect();
        assert_eq!(bodies, vec!["low", "mid", "high"]);
        assert_eq!(exam.questions()[0].body(), "high");
    }
}
