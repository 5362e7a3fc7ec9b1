use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{error::SortError, sorts::Algorithm, SortRoutine};

/// Number of times each routine runs per benchmark in the reference workload.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Scale applied to elapsed seconds so sub-second totals stay readable.
pub const TIME_SCALE: f64 = 10.0;

/// What each of the K calls in a benchmark gets to sort.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[clap(rename_all = "kebab_case")]
#[serde(rename_all = "kebab-case")]
pub enum WorkloadPolicy {
    /// Every call sorts the same sequence object, so only the first call sees
    /// the original order; the remaining K-1 calls sort already-sorted data.
    /// Order-sensitive algorithms like insertion and bubble sort look
    /// near-linear under this policy.
    #[default]
    Reuse,
    /// Every call sorts a fresh copy of the original sequence. Restoring the
    /// copy is not timed.
    Fresh,
}

/// Outcome of one benchmark.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    /// Total wall-clock time across all iterations
    pub elapsed: Duration,
    pub iterations: usize,
    /// Length of the sorted sequence
    pub len: usize,
}

impl BenchmarkResult {
    /// Elapsed seconds scaled by [`TIME_SCALE`], rounded to three decimals.
    pub fn normalized(&self) -> f64 {
        normalize(self.elapsed)
    }
}

pub(crate) fn normalize(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * TIME_SCALE * 1000.0).round() / 1000.0
}

/// Adds the time between its creation and drop to its [`Bencher`].
pub struct BenchTimer<'a> {
    start_time: Instant,
    bencher: &'a Bencher,
}

impl<'a> Drop for BenchTimer<'a> {
    fn drop(&mut self) {
        let elapsed = self.start_time.elapsed();
        self.bencher.elapsed.set(self.bencher.elapsed.get() + elapsed);
    }
}

/// Times sort routines over K iterations.
pub struct Bencher {
    iterations: usize,
    policy: WorkloadPolicy,
    elapsed: Cell<Duration>,
}

impl Default for Bencher {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl Bencher {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            policy: WorkloadPolicy::default(),
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    pub fn policy(mut self, policy: WorkloadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn start_timing(&self) -> BenchTimer {
        BenchTimer {
            start_time: Instant::now(),
            bencher: self,
        }
    }

    pub fn time<R>(&self, f: impl FnOnce() -> R) -> R {
        let _timer = self.start_timing();
        f()
    }

    /// Runs `routine` K times against `seq` and reports the total time.
    ///
    /// `seq` ends up sorted. The first error stops the benchmark and is
    /// returned as is.
    pub fn bench<R: SortRoutine + ?Sized>(
        &self,
        routine: &R,
        seq: &mut [i64],
    ) -> Result<BenchmarkResult, SortError> {
        let algorithm = routine.algorithm();
        log::debug!(
            "benchmarking {} over {} values, {} iterations ({:?})",
            algorithm,
            seq.len(),
            self.iterations,
            self.policy
        );
        self.elapsed.set(Duration::ZERO);
        match self.policy {
            WorkloadPolicy::Reuse => self.time(|| -> Result<(), SortError> {
                for _ in 0..self.iterations {
                    routine.sort(seq)?;
                }
                Ok(())
            })?,
            WorkloadPolicy::Fresh => {
                let original = seq.to_vec();
                for i in 0..self.iterations {
                    if i > 0 {
                        seq.copy_from_slice(&original);
                    }
                    self.time(|| routine.sort(seq).map(|_| ()))?;
                }
            }
        }
        let result = BenchmarkResult {
            algorithm,
            elapsed: self.elapsed.take(),
            iterations: self.iterations,
            len: seq.len(),
        };
        log::debug!("{} finished in {:?}", algorithm, result.elapsed);
        Ok(result)
    }
}
