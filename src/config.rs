use crate::order::Ordering;

pub const DEFAULT_FROM: i64 = 2;
pub const DEFAULT_TO: i64 = 25;

/// Everything a drill run needs, already validated by the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Numbers to study, without duplicates, in the order they were given
    pub numbers: Vec<i64>,
    /// Maximum number of questions to ask (`None` asks all of them)
    pub limit: Option<usize>,
    /// Lowest multiplier, inclusive
    pub from: i64,
    /// Highest multiplier, inclusive. A range with `from > to` is empty.
    pub to: i64,
    pub ordering: Ordering,
    /// Print every question with its answer instead of asking
    pub show_answers: bool,
    /// Seed of the random ordering (`None` takes one from the OS)
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            numbers: Vec::new(),
            limit: None,
            from: DEFAULT_FROM,
            to: DEFAULT_TO,
            ordering: Ordering::Random,
            show_answers: false,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn new(numbers: impl IntoIterator<Item = i64>) -> Self {
        let mut config = Self::default();
        config.set_numbers(numbers);
        config
    }

    /// Replaces the study numbers, dropping repeated ones.
    pub fn set_numbers(&mut self, numbers: impl IntoIterator<Item = i64>) {
        self.numbers.clear();
        for number in numbers {
            if !self.numbers.contains(&number) {
                self.numbers.push(number);
            }
        }
    }

    pub fn range_len(&self) -> u128 {
        if self.from > self.to {
            0
        } else {
            (i128::from(self.to) - i128::from(self.from) + 1) as u128
        }
    }

    /// Size of the drill before the limit is applied.
    pub fn question_count(&self) -> u128 {
        self.numbers.len() as u128 * self.range_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = RunConfig::default();
        assert_eq!(config.from, 2);
        assert_eq!(config.to, 25);
        assert_eq!(config.ordering, Ordering::Random);
        assert_eq!(config.limit, None);
        assert!(!config.show_answers);
    }

    #[test]
    fn numbers_are_a_set() {
        let config = RunConfig::new([7, 3, 7, 5, 3]);
        assert_eq!(config.numbers, vec![7, 3, 5]);
    }

    #[test]
    fn question_count() {
        let mut config = RunConfig::new([3, 4]);
        assert_eq!(config.question_count(), 48);
        config.from = 10;
        config.to = 5;
        assert_eq!(config.question_count(), 0);
        config.from = 5;
        assert_eq!(config.question_count(), 2);
        config.from = i64::MIN;
        config.to = i64::MAX;
        assert_eq!(config.range_len(), 1u128 << 64);
    }
}
