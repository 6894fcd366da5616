//! CLI integration tests for seo-audit.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command to run seo-audit.
#[allow(deprecated)]
fn seo_audit() -> Command {
    Command::cargo_bin("seo-audit").unwrap()
}

#[test]
fn test_help() {
    seo_audit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("One Page SEO Audit CLI"))
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("audit"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version() {
    seo_audit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_setup_help() {
    seo_audit()
        .args(["setup", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Create the virtual environment and install requirements",
        ))
        .stdout(predicate::str::contains("--venv"))
        .stdout(predicate::str::contains("--requirements"))
        .stdout(predicate::str::contains("--python"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn test_audit_help() {
    seo_audit()
        .args(["audit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Run a one-page SEO audit"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--no-lighthouse"));
}

#[test]
fn test_audit_rejects_invalid_url() {
    seo_audit()
        .args(["audit", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid URL. Please enter a valid one.",
        ));
}

#[test]
fn test_audit_rejects_non_http_scheme() {
    seo_audit()
        .args(["audit", "ftp://example.com/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported scheme"));
}

#[test]
fn test_audit_requires_url() {
    seo_audit()
        .arg("audit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<URL>"));
}

#[test]
fn test_invalid_subcommand() {
    seo_audit()
        .arg("invalid-subcommand")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_no_subcommand() {
    seo_audit()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_global_verbose_flag() {
    seo_audit()
        .args(["-vv", "setup", "--help"])
        .assert()
        .success();
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent.toml");

    seo_audit()
        .args(["--config", missing.to_str().unwrap(), "audit", "https://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("seo-audit.toml");
    fs::write(&config, "[audit\nbroken").unwrap();

    seo_audit()
        .current_dir(temp.path())
        .args(["audit", "https://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parsing error"));
}

#[test]
fn test_completions_bash() {
    seo_audit()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -F"));
}

#[test]
fn test_completions_zsh() {
    seo_audit()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef seo-audit"));
}

#[test]
fn test_completions_fish() {
    seo_audit()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -c seo-audit"));
}
