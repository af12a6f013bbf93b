use miette::Diagnostic;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum QuizError {
    #[error("can't write to the output")]
    #[diagnostic(code(m25::io))]
    Io(#[from] std::io::Error),

    #[error("input error occured: {0}")]
    #[diagnostic(code(m25::input), help("answers are read from the terminal line by line"))]
    Input(#[from] ReadlineError),
}
