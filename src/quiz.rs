use std::io::Write;

use crate::error::QuizError;
use crate::format::{self, Weight};
use crate::input::{Answer, AnswerSource};
use crate::question::Question;

const ANSWER_PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub asked: usize,
    pub total: usize,
}

impl Score {
    fn new(total: usize) -> Self {
        Self { total, ..Default::default() }
    }

    /// Integer percentage of right answers over all questions of the quiz,
    /// rounded down. A quiz without questions scores 0.
    pub fn performance(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.correct * 100 / self.total
    }
}

pub struct QuizRunner<W, A> {
    out: W,
    answers: A,
}

impl<W: Write, A: AnswerSource> QuizRunner<W, A> {
    pub fn new(out: W, answers: A) -> Self {
        Self { out, answers }
    }

    pub fn into_inner(self) -> (W, A) {
        (self.out, self.answers)
    }

    /// Either prints every question with its answer, or asks them one by one
    /// and reports the score.
    pub fn run(&mut self, questions: &[Question], show_answers: bool, numbers: &[i64]) -> Result<Score, QuizError> {
        writeln!(self.out, "{}", format::header(numbers))?;
        writeln!(self.out, "{}", format::separator(Weight::Double))?;

        if show_answers {
            for question in questions {
                writeln!(self.out, "{}", format::show_line(question))?;
            }
            return Ok(Score::new(questions.len()));
        }

        let mut score = Score::new(questions.len());
        for (offset, question) in questions.iter().enumerate() {
            if !self.ask(question, offset + 1, &mut score)? {
                log::debug!("quiz interrupted after {} of {} questions", score.asked, score.total);
                break;
            }
        }

        writeln!(self.out, "{}", format::separator(Weight::Double))?;
        writeln!(self.out, "{}", format::finished(score.performance()))?;
        writeln!(self.out, "{}", format::separator(Weight::Double))?;
        self.out.flush()?;
        Ok(score)
    }

    /// Returns `false` when the user wants to stop the quiz.
    fn ask(&mut self, question: &Question, position: usize, score: &mut Score) -> Result<bool, QuizError> {
        writeln!(self.out, "{}", format::separator(Weight::Single))?;
        writeln!(self.out, "{}", format::question_counter(position, score.total))?;
        writeln!(self.out, "{}", format::prompt(question))?;
        self.out.flush()?;

        let answer = self.answers.read_answer(ANSWER_PROMPT)?;
        if answer == Answer::Interrupted {
            return Ok(false);
        }
        score.asked += 1;

        let response = answer.response();
        if question.is_answered_by(response) {
            log::trace!("{question}: right answer");
            writeln!(self.out, "{}", format::correct())?;
            score.correct += 1;
        } else {
            log::trace!("{question}: wrong answer {response:?}");
            writeln!(self.out, "{}", format::incorrect(question))?;
            if !response.is_empty() {
                writeln!(self.out, "{}", format::difference(response, question))?;
            }
        }
        Ok(true)
    }
}
