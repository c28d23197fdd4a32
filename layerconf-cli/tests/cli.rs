//! Integration tests for the layerconf CLI surface.
//!
//! These tests verify argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

fn layerconf() -> Command {
    Command::cargo_bin("layerconf").expect("Failed to find layerconf binary")
}

/// Without a subcommand clap prints usage and fails.
#[test]
fn test_cli_no_arguments() {
    layerconf()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    layerconf()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("layerconf"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    layerconf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Inspect and edit layered configuration files",
        ))
        .stdout(predicate::str::contains("--config-path"));
}

#[test]
fn test_cli_invalid_subcommand() {
    layerconf()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_cli_malformed_flag_override() {
    layerconf()
        .args(["--flag", "no-equals-sign", "get", "port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_cli_completions_bash() {
    layerconf()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("layerconf"));
}
