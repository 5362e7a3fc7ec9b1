#![allow(unused)]

use std::path::{Path, PathBuf};

use clap::Parser;
use tempdir::TempDir;

pub struct TestDir {
    temp_dir: TempDir,
}

impl TestDir {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new("sortbench")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, path: impl AsRef<str>, content: impl AsRef<str>) -> anyhow::Result<PathBuf> {
        let full_path = self.temp_dir.path().join(path.as_ref());
        std::fs::write(&full_path, content.as_ref())?;
        Ok(full_path)
    }

    pub fn sortbench(&self, args: &[&str]) -> anyhow::Result<()> {
        let mut cmd_args = vec!["sortbench"];
        cmd_args.extend_from_slice(args);
        sortbench_cli::entry(&sortbench_cli::Cli::parse_from(cmd_args))
    }
}
