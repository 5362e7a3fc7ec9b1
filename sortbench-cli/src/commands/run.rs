use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use sortbench::{Algorithm, Bencher, Suite, WorkloadPolicy};

use crate::{
    config::{self, Profile, DEFAULT_PROFILE},
    record::{Record, StatPrintFormat},
    utils::{md::MarkdownPrinter, platform::PLATFORM_INFO},
};

/// Benchmark the catalogue without prompting
#[derive(Parser, Default)]
pub struct RunArgs {
    #[arg(short = 'n', long)]
    /// Number of iterations per algorithm
    pub iterations: Option<usize>,
    #[arg(long, default_value = DEFAULT_PROFILE)]
    /// Benchmarking profile
    pub profile: String,
    /// Path to the profiles file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Length of the generated list
    #[arg(long)]
    pub len: Option<usize>,
    /// Seed the generated list
    #[arg(long)]
    pub seed: Option<u64>,
    /// What each iteration sorts
    #[arg(long, value_enum)]
    pub policy: Option<WorkloadPolicy>,
    /// Pass one list through every algorithm instead of a copy each
    #[arg(long, default_value = "false")]
    pub shared: bool,
    /// Only run these algorithms (repeatable)
    #[arg(short = 'a', long = "algorithm", value_enum)]
    pub algorithms: Vec<Algorithm>,
    /// Stats format printed to stderr
    #[arg(long, value_enum, default_value = "table")]
    pub format: StatPrintFormat,
    /// Append results to a csv file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}

impl RunArgs {
    fn generate_runid(&self) -> String {
        let time = chrono::Local::now()
            .format("%Y-%m-%d-%a-%H%M%S")
            .to_string();
        let host = PLATFORM_INFO.host.clone();
        format!("{}-{}-{}", self.profile, host, time)
    }

    /// Overwrite profile values with the ones given on the command line
    pub fn apply(&self, profile: &mut Profile) {
        if let Some(iterations) = self.iterations {
            profile.iterations = iterations;
        }
        if let Some(len) = self.len {
            profile.workload.len = len;
        }
        if self.seed.is_some() {
            profile.workload.seed = self.seed;
        }
        if let Some(policy) = self.policy {
            profile.policy = policy;
        }
        if self.shared {
            profile.shared = true;
        }
        if !self.algorithms.is_empty() {
            profile.algorithms = self.algorithms.clone();
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let config = config::load(self.config.as_deref())?;
        let mut profile = config.profile(&self.profile)?;
        self.apply(&mut profile);
        let mut workload = profile.workload.build()?;

        let runid = self.generate_runid();
        println!("RUNID: {}", runid);
        log::info!(
            "{} on {} ({} {}, {})",
            self.profile,
            PLATFORM_INFO.host,
            PLATFORM_INFO.os,
            PLATFORM_INFO.arch,
            PLATFORM_INFO.cpu_model
        );

        let suite = Suite::new(Bencher::new(profile.iterations).policy(profile.policy))
            .algorithms(profile.algorithms.iter().copied())
            .sharing(profile.sharing());
        let entries = suite.run(&mut workload);

        let mut printer = MarkdownPrinter::new();
        printer.add(format!("# [{}] Sorting results\n\n", self.profile));
        printer.add_results(&entries);
        printer.dump();
        Record {
            runid: &runid,
            policy: profile.policy,
            csv: self.output_csv.as_ref(),
            format: self.format,
            entries: &entries,
        }
        .dump_values()?;

        let failed = entries.iter().filter(|e| e.result.is_err()).count();
        if failed > 0 {
            anyhow::bail!("{} of {} algorithms failed", failed, entries.len());
        }
        println!("{}", "All algorithms completed".green());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_overrides_profile() {
        let args = RunArgs {
            iterations: Some(7),
            len: Some(3),
            seed: Some(9),
            policy: Some(WorkloadPolicy::Fresh),
            shared: true,
            algorithms: vec![Algorithm::Heap],
            ..Default::default()
        };
        let mut profile = Profile::default();
        args.apply(&mut profile);
        assert_eq!(profile.iterations, 7);
        assert_eq!(profile.workload.len, 3);
        assert_eq!(profile.workload.seed, Some(9));
        assert_eq!(profile.policy, WorkloadPolicy::Fresh);
        assert!(profile.shared);
        assert_eq!(profile.algorithms, vec![Algorithm::Heap]);
    }

    #[test]
    fn no_overrides_keep_profile() {
        let mut profile = Profile::default();
        RunArgs::default().apply(&mut profile);
        assert_eq!(profile, Profile::default());
    }
}
