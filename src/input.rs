use std::io::BufRead;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::QuizError;

/// What came back when an answer was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Line(String),
    /// The input is exhausted
    Eof,
    /// The user pressed Ctrl-C
    Interrupted,
}

impl Answer {
    /// Trimmed response text. A missing line reads as an empty response.
    pub fn response(&self) -> &str {
        match self {
            Answer::Line(line) => line.trim(),
            Answer::Eof | Answer::Interrupted => "",
        }
    }
}

pub trait AnswerSource {
    fn read_answer(&mut self, prompt: &str) -> Result<Answer, QuizError>;
}

impl<A: AnswerSource + ?Sized> AnswerSource for Box<A> {
    fn read_answer(&mut self, prompt: &str) -> Result<Answer, QuizError> {
        (**self).read_answer(prompt)
    }
}

impl AnswerSource for DefaultEditor {
    fn read_answer(&mut self, prompt: &str) -> Result<Answer, QuizError> {
        match self.readline(prompt) {
            Ok(line) => Ok(Answer::Line(line)),
            Err(ReadlineError::Eof) => Ok(Answer::Eof),
            Err(ReadlineError::Interrupted) => Ok(Answer::Interrupted),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads answers as plain lines, ignoring the prompt.
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> AnswerSource for LineReader<R> {
    fn read_answer(&mut self, _prompt: &str) -> Result<Answer, QuizError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(Answer::Eof);
        }
        Ok(Answer::Line(line))
    }
}

/// A source with nothing to read. Used when no answers are expected.
pub struct Closed;

impl AnswerSource for Closed {
    fn read_answer(&mut self, _prompt: &str) -> Result<Answer, QuizError> {
        Ok(Answer::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_lines_until_eof() {
        let mut reader = LineReader::new(" 42 \n\n7".as_bytes());
        assert_eq!(reader.read_answer("").unwrap(), Answer::Line(" 42 \n".into()));
        assert_eq!(reader.read_answer("").unwrap(), Answer::Line("\n".into()));
        assert_eq!(reader.read_answer("").unwrap(), Answer::Line("7".into()));
        assert_eq!(reader.read_answer("").unwrap(), Answer::Eof);
        assert_eq!(reader.read_answer("").unwrap(), Answer::Eof);
    }

    #[test]
    fn responses_are_trimmed() {
        assert_eq!(Answer::Line("\t 42 \r\n".into()).response(), "42");
        assert_eq!(Answer::Eof.response(), "");
        assert_eq!(Answer::Interrupted.response(), "");
    }

    #[test]
    fn boxed_source() {
        let mut source: Box<dyn AnswerSource> = Box::new(Closed);
        assert_eq!(source.read_answer("> ").unwrap(), Answer::Eof);
    }
}
