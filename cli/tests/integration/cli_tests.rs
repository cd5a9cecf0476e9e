//! Command-line contract tests.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// The binary with a clean environment, so host `ZURG_*` variables never
/// leak into a test.
pub fn zurg_updater() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("zurg-updater"));
    cmd.env_clear().env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_no_args_prints_help() {
    zurg_updater()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_lists_commands() {
    zurg_updater()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("update")
                .and(predicate::str::contains("watch"))
                .and(predicate::str::contains("start"))
                .and(predicate::str::contains("status")),
        );
}

#[test]
fn test_version_flag() {
    zurg_updater()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_interval_env_is_a_config_error() {
    zurg_updater()
        .env("ZURG_UPDATE_INTERVAL", "daily")
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ZURG_"));
}

#[test]
fn test_no_color_env_accepts_any_value() {
    zurg_updater()
        .env("NO_COLOR", "1")
        .env("ZURG_VERSION", "v0.9.0")
        .arg("update")
        .assert()
        .success();
}
