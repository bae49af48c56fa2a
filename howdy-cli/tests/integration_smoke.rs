//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

// === Top-Level Tests ===

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("howdy").unwrap();
    cmd.arg("--help");

    cmd.assert().success().stdout(
        predicate::str::contains("serve").and(predicate::str::contains("seed")),
    );
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("howdy").unwrap();
    cmd.arg("wave");

    cmd.assert().failure();
}

// === Serve Command Tests ===

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("howdy").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

// === Seed Command Tests ===

#[test]
fn test_seed_help() {
    let mut cmd = Command::cargo_bin("howdy").unwrap();
    cmd.arg("seed").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("one record per name"));
}

#[test]
fn test_seed_requires_names() {
    let mut cmd = Command::cargo_bin("howdy").unwrap();
    cmd.arg("seed");
    cmd.env_remove("DATABASE_URL");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("NAMES"));
}

#[test]
fn test_seed_bad_store_url_fails() {
    let mut cmd = Command::cargo_bin("howdy").unwrap();
    cmd.arg("seed")
        .arg("alice")
        .arg("--database-url")
        .arg("not-a-database-url");
    cmd.env_remove("DATABASE_URL");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open the user store"));
}
