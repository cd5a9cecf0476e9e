//! Integration tests for `zurg-updater start`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::cli_tests::zurg_updater;

#[test]
fn test_start_without_instances_warns() {
    let base = tempfile::tempdir().expect("tempdir");
    zurg_updater()
        .env("ZURG_BASE_DIR", base.path())
        .arg("start")
        .assert()
        .success()
        .stdout(predicate::str::contains("No zurg instances installed"));
}

#[cfg(unix)]
#[test]
fn test_start_launches_installed_instance_in_scope() {
    use std::os::unix::fs::PermissionsExt;

    let base = tempfile::tempdir().expect("tempdir");
    let rd = base.path().join("RD");
    std::fs::create_dir_all(&rd).expect("mkdir");
    let exe = rd.join("zurg");
    std::fs::write(&exe, "#!/bin/sh\npwd > started.txt\n").expect("write");
    std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).expect("chmod");

    zurg_updater()
        .env("ZURG_BASE_DIR", base.path())
        .arg("start")
        .assert()
        .success()
        .stdout(predicate::str::contains("Started zurg w/ RealDebrid"));

    let marker = rd.join("started.txt");
    for _ in 0..50 {
        if marker.exists() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(100));
    }
    assert!(marker.exists(), "instance should run from its scope directory");
}
