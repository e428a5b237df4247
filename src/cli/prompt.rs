use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use crate::error::{Error, ExamResult};
use crate::model::Answer;

/// Line based operator dialogue. Every reader re-prompts until the input is valid.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn parts(&mut self) -> (&mut R, &mut W) {
        (&mut self.input, &mut self.output)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> ExamResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Fails with `InputClosed` at end of input.
    pub fn line(&mut self, message: &str) -> ExamResult<String> {
        prompt!(self.output, "{}> ", message);
        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(s.trim().to_string())
    }

    pub fn text(&mut self, message: &str) -> ExamResult<String> {
        loop {
            let s = self.line(message)?;
            if !s.is_empty() {
                return Ok(s);
            }
            self.say("Please enter some text.")?;
        }
    }

    fn number(&mut self, message: &str, check: impl Fn(u32) -> Result<u32, String>) -> ExamResult<u32> {
        loop {
            let result = self.line(message)?
                .parse::<u32>()
                .map_err(|e| e.to_string())
                .and_then(&check);
            match result {
                Ok(n) => return Ok(n),
                Err(e) => self.say(e)?,
            }
        }
    }

    pub fn number_in(&mut self, message: &str, range: RangeInclusive<u32>) -> ExamResult<u32> {
        let message = format!("{} ({}-{})", message, range.start(), range.end());
        self.number(&message, |n| {
            if range.contains(&n) { Ok(n) }
            else { Err(format!("Number not in range {}-{}.", range.start(), range.end())) }
        })
    }

    pub fn positive(&mut self, message: &str) -> ExamResult<u32> {
        self.positive_up_to(message, u32::MAX)
    }

    pub fn positive_up_to(&mut self, message: &str, max: u32) -> ExamResult<u32> {
        self.number(message, |n| {
            if n == 0 { Err("Number must be positive.".to_string()) }
            else if n > max { Err(format!("Number must not exceed {}.", max)) }
            else { Ok(n) }
        })
    }

    /// Lists `options` numbered from 1 and returns the index of the chosen one.
    pub fn choice(&mut self, message: &str, options: &[&str]) -> ExamResult<usize> {
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "\t{}. {}", i + 1, option)?;
        }
        let n = self.number_in(message, 1..=options.len() as u32)?;
        Ok(n as usize - 1)
    }

    pub fn yes_no(&mut self, message: &str) -> ExamResult<bool> {
        loop {
            match self.line(&format!("{} (y/n)", message))?.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Answer y or n")?,
            }
        }
    }

    /// Shows `answers` and reads the id of one of them.
    pub fn answer_id(&mut self, message: &str, answers: &[Answer]) -> ExamResult<u32> {
        for answer in answers {
            writeln!(self.output, "\t{}", answer)?;
        }
        self.number(message, |id| {
            if answers.iter().any(|a| a.id() == id) { Ok(id) }
            else { Err(format!("{} is not one of the options.", id)) }
        })
    }
}
