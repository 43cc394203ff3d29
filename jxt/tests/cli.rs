//! CLI Interface Tests
//!
//! These tests run the jxt binary end to end: help and version output,
//! token dumps, highlighting, and the exit status of `check`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the jxt binary
fn jxt_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_jxt"))
}

/// Build a command that ignores any user configuration.
fn jxt(temp_dir: &TempDir, config: &str) -> Command {
    let config_path = temp_dir.path().join("jxt.toml");
    std::fs::write(&config_path, config).expect("Failed to write config");

    let mut cmd = Command::new(jxt_bin());
    cmd.current_dir(temp_dir.path())
        .env_remove("JXT_VERBOSE")
        .env_remove("JXT_NO_COLOR")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path);
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(jxt_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("highlight"))
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(jxt_bin());
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("jxt"));
}

#[test]
fn test_cli_tokens_expr() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    jxt(&temp_dir, "")
        .args(["tokens", "-e", "$x := 1"])
        .assert()
        .success()
        .stdout("1:0-2\tvariable\t$x\n1:3-5\toperator\t:=\n1:6-7\tnumber\t1\n");
}

#[test]
fn test_cli_tokens_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = jxt(&temp_dir, "")
        .args(["tokens", "--format", "json", "-e", "Account.`Order ID`"])
        .output()
        .expect("Failed to run jxt");
    assert!(output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    let records = records.as_array().expect("Output should be an array");
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["style"], "string");
    assert_eq!(records[2]["text"], "`Order ID`");
    assert_eq!(records[2]["line"], 1);
}

#[test]
fn test_cli_tokens_format_from_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    jxt(&temp_dir, "[tokens]\nformat = \"json\"\n")
        .args(["tokens", "-e", "null"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"style\": \"keyword\""));
}

#[test]
fn test_cli_tokens_reads_stdin() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    jxt(&temp_dir, "")
        .args(["tokens", "-"])
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("1:0-1\tattribute\ta\n2:0-1\tattribute\tb\n");
}

#[test]
fn test_cli_highlight_no_color() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("query.jsonata");
    std::fs::write(&input, "$sum(Order.Price)\n  ~> $round(2)\n").expect("Failed to write input");

    jxt(&temp_dir, "")
        .arg("--no-color")
        .arg("highlight")
        .arg(&input)
        .assert()
        .success()
        .stdout("$sum(Order.Price)\n  ~> $round(2)\n");
}

#[test]
fn test_cli_highlight_color() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    jxt(&temp_dir, "[theme]\nvariable = \"bright-blue\"\n")
        .args(["highlight", "-e", "$v"])
        .assert()
        .success()
        .stdout("\x1b[94m$v\x1b[0m\n");
}

#[test]
fn test_cli_highlight_color_disabled_in_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    jxt(&temp_dir, "[highlight]\ncolor = false\n")
        .args(["highlight", "-e", "true"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_cli_check_clean() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    jxt(&temp_dir, "")
        .args(["check", "-e", "Account.Order[0].Product"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_cli_check_reports_error_tokens() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("broken.jsonata");
    std::fs::write(&input, "Price > 1e999\n\"abc").expect("Failed to write input");

    let expected = format!(
        "{0}:1:9: number error '1e999'\n{0}:2:1: string error '\"abc'\n",
        input.display()
    );

    jxt(&temp_dir, "")
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stdout(expected)
        .stderr(predicate::str::contains("2 error token(s) found"));
}

#[test]
fn test_cli_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    jxt(&temp_dir, "")
        .args(["tokens", "does-not-exist.jsonata"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.jsonata"));
}

#[test]
fn test_cli_tokens_json_keeps_good_file_when_another_is_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let good = temp_dir.path().join("ok.jsonata");
    std::fs::write(&good, "a").expect("Failed to write input");

    let output = jxt(&temp_dir, "")
        .args(["tokens", "--format", "json"])
        .arg(&good)
        .arg("missing.jsonata")
        .output()
        .expect("Failed to run jxt");
    assert!(!output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    let records = records.as_array().expect("Output should be an array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["text"], "a");
    assert_eq!(records[0]["source"], good.display().to_string());
}

#[test]
fn test_cli_requires_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    jxt(&temp_dir, "")
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input files or expression specified"));
}

#[test]
fn test_cli_invalid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    jxt(&temp_dir, "jobs = 0\n")
        .args(["check", "-e", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("jobs must be at least 1"));
}
