//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".brandflow");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Fixture whose data directory already holds `config.toml`
    pub fn with_config(content: &str) -> Self {
        let fixture = Self::new();
        fs::write(fixture.config_path(), content).expect("Failed to write config");
        fixture
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("brandflow").expect("Failed to find brandflow binary");
        cmd.arg("--config")
            .arg(&self.data_dir)
            .env_remove("RUST_LOG")
            .env_remove("BRANDFLOW_PATH");
        cmd
    }

    /// Run with `--format json` and parse stdout
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run brandflow");

        assert!(
            output.status.success(),
            "brandflow {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Output is not JSON")
    }
}
