//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("llm-prompt-generator"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("llm-prompt-generator"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("llm-prompt-generator"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Python package"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--pairing"));
}

#[test]
fn test_root_dir_is_required() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("llm-prompt-generator"));
    cmd.assert().failure().stderr(predicate::str::contains("ROOT_DIR"));
}

#[test]
fn test_rejects_missing_root_dir() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("llm-prompt-generator"));
    cmd.current_dir(tmp.path()).arg("no-such-package");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Root directory does not exist"));
}

#[test]
fn test_rejects_invalid_pairing_mode() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("llm-prompt-generator"));
    cmd.current_dir(tmp.path()).args([".", "--pairing", "sideways"]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid pairing mode"));
}

#[test]
fn test_rejects_unknown_encoding() {
    let tmp = TempDir::new().expect("tmp");
    std::fs::write(
        tmp.path().join("pyproject.toml"),
        "[tool.poetry]\nname = \"x\"\ndescription = \"y\"\n",
    )
    .expect("manifest");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("llm-prompt-generator"));
    cmd.current_dir(tmp.path()).args([".", "--encoding", "klingon"]);
    cmd.assert().failure().stderr(predicate::str::contains("unknown encoding label"));
    assert!(!tmp.path().join("prompt.txt").exists());
}
