//! CLI contract tests.
//!
//! Exercises the binary surface: usage display, exit codes, and boundary
//! validation. None of these invocations reach the external collaborators.

use assert_cmd::Command;
use predicates::prelude::*;

fn nodepack() -> Command {
    Command::cargo_bin("nodepack").unwrap()
}

#[test]
fn bare_invocation_prints_usage_and_exits_zero() {
    nodepack()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn help_flag_prints_usage_and_exits_zero() {
    nodepack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--platform"))
        .stdout(predicate::str::contains("--assets"));
}

#[test]
fn missing_entry_is_a_usage_error() {
    nodepack()
        .args(["--target", "18"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing required argument"));
}

#[test]
fn nonexistent_entry_fails_resolution() {
    nodepack()
        .arg("definitely-missing.js")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn out_of_range_platform_is_rejected_at_the_boundary() {
    nodepack()
        .args(["--platform", "solaris", "app.js"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn non_digit_version_token_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let entry = dir.path().join("app.js");
    std::fs::write(&entry, "1").unwrap();

    nodepack()
        .arg("--target")
        .arg("latest")
        .arg(&entry)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid runtime version token"));
}
