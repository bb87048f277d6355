use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn termfolio(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("termfolio");
    cmd.env("TERMFOLIO_HOME", home);
    cmd
}

#[test]
fn test_run_help_prints_command_list() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["run", "help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AVAILABLE COMMANDS:"))
        .stdout(predicate::str::contains("personnel"));
}

#[test]
fn test_run_joins_arguments_and_ignores_case() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["run", "PROJECTS", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[001]"));
}

#[test]
fn test_run_unknown_command_is_not_an_error() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["run", "frobnicate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMAND NOT RECOGNIZED: \"FROBNICATE\""));
}

#[test]
fn test_run_clear_prints_nothing() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["run", "clear"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_run_json_outputs_lines() {
    let dir = tempdir().unwrap();

    let output = termfolio(dir.path())
        .args(["run", "--json", "projects"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["outcome"], "lines");
    let lines = value["lines"].as_array().unwrap();
    assert!(
        lines
            .iter()
            .any(|line| line["kind"] == "command" && line["command_text"] == "projects 1")
    );
}

#[test]
fn test_run_describes_resume_instead_of_opening() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "resume = \"https://terry.dev/resume.pdf\"\n",
    )
    .unwrap();

    termfolio(dir.path())
        .args(["run", "resume"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OPENING RESUME DOCUMENT"))
        .stderr(predicate::str::contains(
            "would open resume: https://terry.dev/resume.pdf",
        ));
}

#[test]
fn test_run_uses_portfolio_override() {
    let dir = tempdir().unwrap();
    let portfolio = dir.path().join("portfolio.toml");
    let builtin = cargo_bin_cmd!("termfolio")
        .args(["portfolio", "export"])
        .output()
        .unwrap();
    let source = String::from_utf8(builtin.stdout)
        .unwrap()
        .replace("Aiden Terry", "Grace Hopper");
    fs::write(&portfolio, source).unwrap();

    termfolio(dir.path())
        .arg("--portfolio")
        .arg(&portfolio)
        .args(["run", "personnel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PERSONNEL FILE: Grace Hopper"));
}

#[test]
fn test_missing_portfolio_file_fails() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["--portfolio", "/nonexistent/portfolio.toml", "run", "help"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read portfolio"));
}
