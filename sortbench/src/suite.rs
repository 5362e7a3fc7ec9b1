use crate::{
    bencher::{Bencher, BenchmarkResult},
    error::SortError,
    sorts::Algorithm,
    workload::Workload,
};

/// How the generated sequence is shared between the algorithms of a suite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SharingPolicy {
    /// Every algorithm starts from its own copy of the generated sequence.
    #[default]
    Isolated,
    /// One sequence flows through the whole catalogue; only the first
    /// algorithm sees it unsorted.
    Shared,
}

/// Result of one algorithm within a suite run.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteEntry {
    pub algorithm: Algorithm,
    pub result: Result<BenchmarkResult, SortError>,
}

/// Benchmarks a list of algorithms against one workload.
pub struct Suite {
    bencher: Bencher,
    algorithms: Vec<Algorithm>,
    sharing: SharingPolicy,
}

impl Suite {
    pub fn new(bencher: Bencher) -> Self {
        Self {
            bencher,
            algorithms: Algorithm::ALL.to_vec(),
            sharing: SharingPolicy::default(),
        }
    }

    pub fn algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    pub fn sharing(mut self, sharing: SharingPolicy) -> Self {
        self.sharing = sharing;
        self
    }

    /// Draws one sequence from `workload` and benches every algorithm on it,
    /// in order. A failing algorithm only fails its own entry.
    pub fn run(&self, workload: &mut dyn Workload) -> Vec<SuiteEntry> {
        let input = workload.generate();
        log::info!(
            "running {} algorithms on {}",
            self.algorithms.len(),
            workload.describe()
        );
        let mut shared = input.clone();
        let mut entries = Vec::with_capacity(self.algorithms.len());
        for algorithm in &self.algorithms {
            let result = match self.sharing {
                SharingPolicy::Isolated => {
                    let mut seq = input.clone();
                    self.bencher.bench(algorithm, &mut seq)
                }
                SharingPolicy::Shared => self.bencher.bench(algorithm, &mut shared),
            };
            if let Err(e) = &result {
                log::warn!("{} failed: {}", algorithm, e);
            }
            entries.push(SuiteEntry {
                algorithm: *algorithm,
                result,
            });
        }
        entries
    }
}
