//! End-to-end CLI tests that do not require a reporting server

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finrep(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finrep").unwrap();
    cmd.env("FINREP_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn help_lists_subcommands() {
    let config = TempDir::new().unwrap();
    finrep(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("balance"))
        .stdout(predicate::str::contains("pnl"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn no_args_prints_usage_hint() {
    let config = TempDir::new().unwrap();
    finrep(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("finrep --help"));
}

#[test]
fn config_shows_defaults() {
    let config = TempDir::new().unwrap();
    finrep(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:5000"))
        .stdout(predicate::str::contains("Company ID:      1"));
}

#[test]
fn export_rejects_malformed_date() {
    let config = TempDir::new().unwrap();
    finrep(&config)
        .args(["export", "balance", "--start", "31-12-2017"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn export_rejects_unknown_format() {
    let config = TempDir::new().unwrap();
    finrep(&config)
        .args(["export", "balance", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
