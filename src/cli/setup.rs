use std::io::{BufRead, Write};

use tracing::info;

use crate::error::{Error, ExamResult};
use crate::model::{Answer, Exam, ExamKind, MAX_TIME_LIMIT, MIN_TIME_LIMIT, Question, QuestionKind, Subject, TimeLimit};

use super::Console;

/// Operator supplied texts for every multiple choice question.
pub const MCQ_OPTIONS: u32 = 3;

pub fn build_subject<R: BufRead, W: Write>(console: &mut Console<R, W>, id: u32, name: &str) -> ExamResult<Subject> {
    let mut subject = Subject::new(id, name);
    subject.create_exam(build_exam(console)?);
    Ok(subject)
}

pub fn build_exam<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ExamResult<Exam> {
    let kind = match console.choice("Exam type", &[ExamKind::Final.title(), ExamKind::Practical.title()])? {
        0 => ExamKind::Final,
        _ => ExamKind::Practical,
    };
    let minutes = console.number_in("Time limit in minutes", MIN_TIME_LIMIT..=MAX_TIME_LIMIT)?;
    let count = console.positive("Number of questions")?;

    let mut exam = Exam::new(kind, TimeLimit::from_minutes(minutes)?);
    for n in 1..=count {
        console.say(format!("\nQuestion {} of {}", n, count))?;
        let question = build_question(console, kind, exam.remaining_marks())?;
        exam.add_question(question)?;
    }
    info!(%kind, questions = count, total = exam.total_marks(), "exam created");
    Ok(exam)
}

/// Practical exams only hold multiple choice questions. `max_mark` keeps the exam total within `u32`.
fn build_question<R: BufRead, W: Write>(console: &mut Console<R, W>, exam: ExamKind, max_mark: u32) -> ExamResult<Question> {
    let kind = match exam {
        ExamKind::Practical => QuestionKind::Mcq,
        ExamKind::Final => match console.choice("Question type", &[QuestionKind::TrueFalse.header(), QuestionKind::Mcq.header()])? {
            0 => QuestionKind::TrueFalse,
            _ => QuestionKind::Mcq,
        },
    };
    let body = console.text("Question")?;
    if max_mark == 0 {
        return Err(Error::MarksOverflow { mark: 1 });
    }
    let mark = console.positive_up_to("Mark", max_mark)?;

    match kind {
        QuestionKind::TrueFalse => {
            let correct = console.answer_id("Correct answer", &Question::true_false_answers())?;
            Question::true_false(body, mark, correct)
        }
        QuestionKind::Mcq => {
            let mut answers = Vec::with_capacity(MCQ_OPTIONS as usize);
            for id in 1..=MCQ_OPTIONS {
                answers.push(Answer::new(id, console.text(&format!("Option {}", id))?));
            }
            let correct = console.answer_id("Correct answer", &answers)?;
            Question::mcq(body, mark, answers, correct)
        }
    }
}
