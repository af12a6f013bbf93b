use colored::*;

use crate::question::Question;

pub const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    /// Between questions
    Single,
    /// Around the start and the finish of a quiz
    Double,
}

pub fn separator(weight: Weight) -> String {
    let glyph = match weight {
        Weight::Single => "-",
        Weight::Double => "=",
    };
    str::repeat(glyph, SEPARATOR_WIDTH).blue().to_string()
}

pub fn header(numbers: &[i64]) -> String {
    let mut numbers = numbers.to_vec();
    numbers.sort_unstable();
    let numbers = numbers.iter().map(i64::to_string).collect::<Vec<_>>().join(", ");
    format!("Multiplication Practice for {}.", numbers.bold())
}

pub fn show_line(question: &Question) -> String {
    format!("{} = {}", question.prompt(), question.answer().bold())
}

pub fn question_counter(position: usize, total: usize) -> String {
    format!("Question {} of {}", position, total)
}

pub fn prompt(question: &Question) -> String {
    question.prompt().yellow().bold().to_string()
}

pub fn correct() -> String {
    format!("⭐️ {}", "Correct".green().bold())
}

pub fn incorrect(question: &Question) -> String {
    format!("❌ {} {} = {}", "Incorrect".red().bold(), question.prompt(), question.answer().bold())
}

/// Character diff from the response to the right answer.
pub fn difference(response: &str, question: &Question) -> String {
    format!("{} {}", "Right:".bold(), prettydiff::diff_chars(response, &question.answer()))
}

pub fn finished(performance: usize) -> String {
    format!("🏁🏁🏁 Finished {}% 🏁🏁🏁", performance.to_string().bold())
}
