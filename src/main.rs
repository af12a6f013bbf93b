use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustyline::DefaultEditor;
use std::io;

use m25::args::Args;
use m25::input::{AnswerSource, Closed};
use m25::question;
use m25::quiz::QuizRunner;

fn main() -> Result<()> {
    pretty_env_logger::init();
    let config = Args::parse().into_config();
    log::debug!("{config:?}, {} questions before the limit", config.question_count());

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::debug!("seed of the random order: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let questions = question::build(&config, &mut rng);

    let answers: Box<dyn AnswerSource> = if config.show_answers {
        Box::new(Closed)
    } else {
        Box::new(DefaultEditor::new().into_diagnostic()?)
    };
    let mut runner = QuizRunner::new(io::stdout().lock(), answers);
    let score = runner.run(&questions, config.show_answers, &config.numbers)?;
    log::debug!("{score:?}");

    Ok(())
}
