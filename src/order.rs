use clap::ValueEnum;
use rand::{seq::SliceRandom, Rng};

use crate::question::Question;

/// How the questions are arranged before they are asked.
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// Shuffle all questions
    #[default]
    Random,
    /// Ascending by the pair (number, multiplier)
    Sorted,
    /// Descending by the pair (number, multiplier)
    Reversed,
}

impl Ordering {
    pub fn arrange<R: Rng + ?Sized>(self, mut questions: Vec<Question>, rng: &mut R) -> Vec<Question> {
        match self {
            Ordering::Random => questions.shuffle(rng),
            Ordering::Sorted => questions.sort(),
            Ordering::Reversed => questions.sort_by(|lhs, rhs| rhs.cmp(lhs)),
        }
        questions
    }
}

impl std::fmt::Display for Ordering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ordering::Random => "random",
            Ordering::Sorted => "sorted",
            Ordering::Reversed => "reversed",
        };
        write!(f, "{}", name)
    }
}
