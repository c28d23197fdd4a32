//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated config directory and command builders that point
//! the `layerconf` binary at it.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated config directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory passed as `--config-path`
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty config directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("conf");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            config_dir,
        }
    }

    /// Bare command with inherited configuration variables removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("layerconf").expect("Failed to find layerconf binary");
        cmd.env_remove("LAYERCONF_CONFIG_NAME")
            .env_remove("LAYERCONF_CONFIG_TYPE")
            .env_remove("LAYERCONF_LOG_MODE");
        cmd
    }

    /// Command with `--config-path` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-path").arg(&self.config_dir);
        cmd
    }

    /// Command for a YAML config in this environment.
    pub fn yaml_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--config-type").arg("yaml");
        cmd
    }

    /// Path of a file inside the config directory.
    pub fn config_file(&self, file_name: &str) -> PathBuf {
        self.config_dir.join(file_name)
    }

    /// Write a file into the config directory.
    pub fn write_config(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.config_file(file_name);
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Read a file from the config directory.
    pub fn read_config(&self, file_name: &str) -> String {
        std::fs::read_to_string(self.config_file(file_name)).expect("Failed to read config file")
    }

    /// Create an extra directory under the temporary root.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run `get KEY` and return trimmed stdout, asserting success.
    pub fn get(&self, key: &str) -> String {
        let output = self
            .command()
            .arg("--no-env")
            .arg("get")
            .arg(key)
            .output()
            .expect("Failed to run get command");

        assert!(
            output.status.success(),
            "get failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }

    /// Run `set KEY VALUE`, asserting success.
    pub fn set(&self, key: &str, value: &str) {
        self.command().arg("set").arg(key).arg(value).assert().success();
    }

    /// The root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
