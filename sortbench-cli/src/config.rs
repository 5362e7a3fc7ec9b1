use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sortbench::{Algorithm, RandomWorkload, SharingPolicy, WorkloadPolicy, DEFAULT_ITERATIONS};

/// Config file picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "sortbench.toml";

pub const DEFAULT_PROFILE: &str = "default";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles: HashMap::from([(DEFAULT_PROFILE.to_owned(), Profile::default())]),
        }
    }
}

impl Config {
    pub fn profile(&self, name: &str) -> anyhow::Result<Profile> {
        let Some(profile) = self.profiles.get(name).cloned() else {
            anyhow::bail!("Could not find sortbench profile `{}`", name);
        };
        Ok(profile)
    }
}

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

fn all_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    /// Number of times each algorithm runs
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default)]
    pub policy: WorkloadPolicy,
    /// Pass one sequence through every algorithm instead of a copy each
    #[serde(default)]
    pub shared: bool,
    #[serde(default = "all_algorithms")]
    pub algorithms: Vec<Algorithm>,
    #[serde(default)]
    pub workload: WorkloadConfig,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            policy: WorkloadPolicy::default(),
            shared: false,
            algorithms: all_algorithms(),
            workload: WorkloadConfig::default(),
        }
    }
}

impl Profile {
    pub fn sharing(&self) -> SharingPolicy {
        if self.shared {
            SharingPolicy::Shared
        } else {
            SharingPolicy::Isolated
        }
    }
}

fn default_len() -> usize {
    RandomWorkload::DEFAULT_LEN
}

fn default_min() -> i64 {
    *RandomWorkload::DEFAULT_RANGE.start()
}

fn default_max() -> i64 {
    *RandomWorkload::DEFAULT_RANGE.end()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkloadConfig {
    #[serde(default = "default_len")]
    pub len: usize,
    #[serde(default = "default_min")]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
    /// Fixed seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            len: default_len(),
            min: default_min(),
            max: default_max(),
            seed: None,
        }
    }
}

impl WorkloadConfig {
    pub fn build(&self) -> anyhow::Result<RandomWorkload> {
        if self.min > self.max {
            anyhow::bail!(
                "Invalid workload range: min {} is greater than max {}",
                self.min,
                self.max
            );
        }
        let range = self.min..=self.max;
        Ok(match self.seed {
            Some(seed) => RandomWorkload::seeded(self.len, range, seed),
            None => RandomWorkload::new(self.len, range),
        })
    }
}

pub fn load_from_file(path: &Path) -> anyhow::Result<Config> {
    if !path.is_file() {
        anyhow::bail!("Failed to load {}", path.display());
    }
    let s = std::fs::read_to_string(path)?;
    toml::from_str::<Config>(&s).with_context(|| format!("Invalid config {}", path.display()))
}

/// Loads `path` if given. Otherwise loads `./sortbench.toml`, falling back to the
/// built-in default profile when that file does not exist.
pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return load_from_file(path);
    }
    let local = PathBuf::from(CONFIG_FILE);
    if local.is_file() {
        log::debug!("loading profiles from {}", local.display());
        load_from_file(&local)
    } else {
        Ok(Config::default())
    }
}
