#![allow(unused)]

use std::{cell::Cell, cmp::Ordering};

use rand::prelude::*;
use rand::rngs::SmallRng;

pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Sorted copy produced by the standard library, used as the oracle.
pub fn expected(data: &[i64]) -> Vec<i64> {
    let mut data = data.to_vec();
    data.sort();
    data
}

pub fn random_list(seed: u64, len: usize, max: i64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..=max)).collect()
}

thread_local! {
    static COMPARISONS: Cell<usize> = const { Cell::new(0) };
}

/// An integer that counts how often it is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counted(pub i64);

impl Counted {
    pub fn reset() {
        COMPARISONS.with(|c| c.set(0));
    }

    pub fn comparisons() -> usize {
        COMPARISONS.with(|c| c.get())
    }
}

impl PartialOrd for Counted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counted {
    fn cmp(&self, other: &Self) -> Ordering {
        COMPARISONS.with(|c| c.set(c.get() + 1));
        self.0.cmp(&other.0)
    }
}

/// Ordered by `key` only; `tag` remembers the original position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub key: i64,
    pub tag: usize,
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
