use std::ops::RangeInclusive;

use rand::prelude::*;
use rand::rngs::SmallRng;

/// Supplies the sequences a benchmark sorts.
pub trait Workload {
    fn generate(&mut self) -> Vec<i64>;

    /// Human-readable summary, used in run logs.
    fn describe(&self) -> String;
}

/// Uniformly random integers drawn from an inclusive range.
pub struct RandomWorkload {
    rng: SmallRng,
    len: usize,
    range: RangeInclusive<i64>,
    seed: Option<u64>,
}

impl RandomWorkload {
    pub const DEFAULT_LEN: usize = 10;
    pub const DEFAULT_RANGE: RangeInclusive<i64> = 1..=100;

    /// A workload seeded from OS entropy.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    pub fn new(len: usize, range: RangeInclusive<i64>) -> Self {
        assert!(!range.is_empty(), "empty workload range {range:?}");
        Self {
            rng: SmallRng::from_entropy(),
            len,
            range,
            seed: None,
        }
    }

    /// A reproducible workload: the same seed always yields the same sequences.
    pub fn seeded(len: usize, range: RangeInclusive<i64>, seed: u64) -> Self {
        assert!(!range.is_empty(), "empty workload range {range:?}");
        Self {
            rng: SmallRng::seed_from_u64(seed),
            len,
            range,
            seed: Some(seed),
        }
    }
}

impl Default for RandomWorkload {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEN, Self::DEFAULT_RANGE)
    }
}

impl Workload for RandomWorkload {
    fn generate(&mut self) -> Vec<i64> {
        (0..self.len)
            .map(|_| self.rng.gen_range(self.range.clone()))
            .collect()
    }

    fn describe(&self) -> String {
        let seed = match self.seed {
            Some(seed) => format!("seed {seed}"),
            None => "unseeded".to_owned(),
        };
        format!(
            "{} random values in {}..={} ({})",
            self.len,
            self.range.start(),
            self.range.end(),
            seed
        )
    }
}

/// Hands out copies of a caller-provided sequence.
#[derive(Debug, Clone, Default)]
pub struct FixedWorkload(pub Vec<i64>);

impl Workload for FixedWorkload {
    fn generate(&mut self) -> Vec<i64> {
        self.0.clone()
    }

    fn describe(&self) -> String {
        format!("{} fixed values", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_reproducible() {
        let a = RandomWorkload::seeded(64, 1..=100, 42).generate();
        let b = RandomWorkload::seeded(64, 1..=100, 42).generate();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.iter().all(|v| (1..=100).contains(v)));
    }

    #[test]
    fn default_matches_reference_workload() {
        let data = RandomWorkload::default().generate();
        assert_eq!(data.len(), 10);
        assert!(data.iter().all(|v| (1..=100).contains(v)));
    }

    #[test]
    fn fixed_returns_copies() {
        let mut fixed = FixedWorkload(vec![3, 1, 2]);
        let mut first = fixed.generate();
        first.sort();
        assert_eq!(fixed.generate(), vec![3, 1, 2]);
        assert_eq!(fixed.describe(), "3 fixed values");
    }

    #[test]
    #[should_panic]
    fn empty_range_panics() {
        #[allow(clippy::reversed_empty_ranges)]
        let _ = RandomWorkload::new(4, 10..=1);
    }
}
