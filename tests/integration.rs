// Integration tests for the fidelity CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument handling, exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the fidelity binary.
fn fidelity() -> Command {
    Command::cargo_bin("fidelity").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    fidelity()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fidelity"));
}

#[test]
fn cli_help_flag() {
    fidelity()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("data fidelity pre-rating"));
}

#[test]
fn rate_requires_source_and_verification() {
    fidelity()
        .args(["rate", "--frequency", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn rate_rejects_unknown_source() {
    fidelity()
        .args(["rate", "--source", "satellite", "--verification", "unverified"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn rate_rejects_unknown_min_grade() {
    fidelity()
        .args([
            "rate",
            "--source",
            "metered",
            "--verification",
            "unverified",
            "--min-grade",
            "CCC",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown rating grade"));
}

#[test]
fn scan_requires_path() {
    fidelity()
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    fidelity()
        .args(["-q", "-v", "policies"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
