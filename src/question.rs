use rand::Rng;

use crate::config::RunConfig;

/// One multiplication fact, `a·b`.
///
/// Fields are declared in `(a, b)` order so the derived [`Ord`] is the
/// lexicographic order of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Question {
    pub a: i64,
    pub b: i64,
}

impl Question {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    pub fn prompt(&self) -> String {
        self.to_string()
    }

    /// Canonical decimal spelling of the product. Computed in `i128`, which
    /// holds any product of two `i64` values.
    pub fn answer(&self) -> String {
        (i128::from(self.a) * i128::from(self.b)).to_string()
    }

    pub fn is_answered_by(&self, response: &str) -> bool {
        response == self.answer()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}·{}", self.a, self.b)
    }
}

/// Builds the drill: every study number against every multiplier of the
/// range, arranged by the configured ordering and cut to the limit.
pub fn build<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Vec<Question> {
    let (from, to) = (config.from, config.to);
    let questions: Vec<Question> = config
        .numbers
        .iter()
        .flat_map(|&a| (from..=to).map(move |b| Question::new(a, b)))
        .collect();
    log::debug!("generated {} questions for {:?} in [{from}, {to}]", questions.len(), config.numbers);

    let mut questions = config.ordering.arrange(questions, rng);
    if let Some(limit) = config.limit {
        questions.truncate(limit);
    }
    questions
}
