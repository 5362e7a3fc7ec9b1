use std::io::{self, Write};
use std::{fs::OpenOptions, path::PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use sortbench::{SuiteEntry, WorkloadPolicy};

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[clap(rename_all = "kebab_case")]
pub enum StatPrintFormat {
    #[default]
    Table,
    Yaml,
    Json,
}

const CSV_HEADER: &str = "runid,algorithm,len,iterations,policy,elapsed_ms,normalized";

#[derive(Serialize)]
struct JsonEntry<'a> {
    algorithm: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Statistics of one benchmark run, ready to be dumped.
pub struct Record<'a> {
    pub runid: &'a str,
    pub policy: WorkloadPolicy,
    pub csv: Option<&'a PathBuf>,
    pub format: StatPrintFormat,
    pub entries: &'a [SuiteEntry],
}

impl<'a> Record<'a> {
    fn stats(&self) -> Vec<(&'static str, String)> {
        self.entries
            .iter()
            .map(|e| {
                let value = match &e.result {
                    Ok(result) => format!("{:.3}", result.normalized()),
                    Err(_) => "failed".to_owned(),
                };
                (e.algorithm.id(), value)
            })
            .collect()
    }

    fn dump_stats_table(&self, f: &mut impl Write) -> io::Result<()> {
        let stats = self.stats();
        for (name, _) in &stats {
            write!(f, "{}\t", name)?;
        }
        writeln!(f)?;
        for (_, value) in &stats {
            write!(f, "{}\t", value)?;
        }
        writeln!(f)
    }

    fn dump_stats_yaml(&self, f: &mut impl Write) -> io::Result<()> {
        for (name, value) in self.stats() {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }

    fn dump_stats_json(&self, f: &mut impl Write) -> io::Result<()> {
        let entries = self
            .entries
            .iter()
            .map(|e| JsonEntry {
                algorithm: e.algorithm.id(),
                time: e.result.as_ref().ok().map(|r| r.normalized()),
                error: e.result.as_ref().err().map(|e| e.to_string()),
            })
            .collect::<Vec<_>>();
        writeln!(f, "{}", serde_json::to_string(&entries)?)
    }

    /// Writes the stats block, framed by the start and end banners.
    pub fn dump_stats(&self, f: &mut impl Write) -> io::Result<()> {
        let banner_start = std::env::var("SORTBENCH_LOG_STAT_BANNER_START").unwrap_or_else(|_| {
            "============================ Sortbench Statistics Totals ============================".to_string()
        });
        writeln!(f, "{banner_start}")?;
        match self.format {
            StatPrintFormat::Table => self.dump_stats_table(f)?,
            StatPrintFormat::Yaml => self.dump_stats_yaml(f)?,
            StatPrintFormat::Json => self.dump_stats_json(f)?,
        }
        let banner_end = std::env::var("SORTBENCH_LOG_STAT_BANNER_END").unwrap_or_else(|_| {
            "------------------------------ End Sortbench Statistics -----------------------------".to_string()
        });
        writeln!(f, "{banner_end}")
    }

    /// Appends one row per successful entry, writing the header first if the
    /// file is new.
    pub fn dump_csv(&self) -> io::Result<()> {
        let Some(csv) = self.csv else {
            return Ok(());
        };
        if !csv.exists() {
            std::fs::write(csv, format!("{CSV_HEADER}\n"))?;
        }
        let mut file = OpenOptions::new().append(true).open(csv)?;
        for entry in self.entries {
            let Ok(result) = &entry.result else {
                continue;
            };
            writeln!(
                file,
                "{},{},{},{},{},{},{}",
                self.runid,
                entry.algorithm.id(),
                result.len,
                result.iterations,
                policy_name(self.policy),
                result.elapsed.as_micros() as f64 / 1000.0,
                result.normalized()
            )?;
        }
        Ok(())
    }

    pub fn dump_values(&self) -> io::Result<()> {
        self.dump_stats(&mut io::stderr().lock())?;
        self.dump_csv()
    }
}

fn policy_name(policy: WorkloadPolicy) -> &'static str {
    match policy {
        WorkloadPolicy::Reuse => "reuse",
        WorkloadPolicy::Fresh => "fresh",
    }
}
