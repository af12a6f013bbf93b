use clap::builder::RangedU64ValueParser;
use clap::Parser;

use crate::config::{RunConfig, DEFAULT_FROM, DEFAULT_TO};
use crate::order::Ordering;

/// Program for practicing multiplication tables
#[derive(Parser, Debug)]
#[command(name = "m25", version, about, allow_negative_numbers = true)]
pub struct Args {
    /// Numbers to study
    #[arg(required = true, num_args(1..))]
    pub numbers: Vec<i64>,

    /// How many questions you want to answer (every question by default)
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Lowest multiplier
    #[arg(short, long, default_value_t = DEFAULT_FROM)]
    pub from: i64,

    /// Highest multiplier
    #[arg(short, long, default_value_t = DEFAULT_TO)]
    pub to: i64,

    /// Order of the questions
    #[arg(long, value_enum, default_value_t = Ordering::Random)]
    pub order: Ordering,

    /// Print all questions with their answers and exit
    #[arg(long)]
    pub show: bool,

    /// Seed for the random order, to repeat the same drill
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn into_config(self) -> RunConfig {
        let mut config = RunConfig {
            limit: self.limit,
            from: self.from,
            to: self.to,
            ordering: self.order,
            show_answers: self.show,
            seed: self.seed,
            ..Default::default()
        };
        config.set_numbers(self.numbers);
        config
    }
}
