//! Tests for the `process_matcher` application service.

#![allow(clippy::expect_used)]

use std::path::Path;

use zurg_updater::application::services::process_matcher::{find_matching, terminate_matching};
use zurg_updater::domain::{IdentityTag, ProcessFault};

use crate::mocks::{Event, FakeHost};

const RD: &str = "/zurg/RD";

fn terminate(host: &FakeHost) -> usize {
    terminate_matching(host, Path::new(RD), IdentityTag::RealDebrid).expect("pattern builds")
}

#[test]
fn test_terminate_kills_every_matching_process() {
    let host = FakeHost::new()
        .with_process(10, "/zurg/RD/zurg --preload")
        .with_process(11, "/usr/bin/rclone mount zurg:")
        .with_process(12, "/zurg/RD/zurg --config /zurg/RD/config.yml --preload");

    assert_eq!(terminate(&host), 2);
    assert_eq!(host.killed(), vec![10, 12]);
    assert_eq!(host.live_pids(), vec![11]);
}

#[test]
fn test_terminate_kills_nothing_without_match() {
    let host = FakeHost::new()
        .with_process(10, "/zurg/AD/zurg --preload")
        .with_process(11, "/zurg/RD/zurg")
        .with_process(12, "/sbin/init");

    assert_eq!(terminate(&host), 0);
    assert!(host.killed().is_empty());
}

#[test]
fn test_terminate_matches_case_insensitively() {
    let host = FakeHost::new().with_process(10, "/ZURG/rd/ZURG --PreLoad");
    assert_eq!(terminate(&host), 1);
}

#[test]
fn test_terminate_vanished_process_does_not_stop_enumeration() {
    let host = FakeHost::new()
        .with_vanishing_process(10, "/zurg/RD/zurg --preload")
        .with_process(11, "/zurg/RD/zurg --preload");

    assert_eq!(terminate(&host), 1);
    assert_eq!(host.killed(), vec![11]);
}

#[test]
fn test_terminate_skips_denied_and_zombie_processes() {
    let host = FakeHost::new()
        .with_faulty_process(10, "/zurg/RD/zurg --preload", ProcessFault::Denied)
        .with_faulty_process(11, "/zurg/RD/zurg --preload", ProcessFault::Zombie)
        .with_process(12, "/zurg/RD/zurg --preload");

    assert_eq!(terminate(&host), 1);
    assert_eq!(host.killed(), vec![12]);
}

#[test]
fn test_terminate_kill_fault_does_not_stop_enumeration() {
    let host = FakeHost::new()
        .with_unkillable_process(10, "/zurg/RD/zurg --preload", ProcessFault::Denied)
        .with_unkillable_process(11, "/zurg/RD/zurg --preload", ProcessFault::Gone)
        .with_process(12, "/zurg/RD/zurg --preload");

    assert_eq!(terminate(&host), 1);
    assert_eq!(host.killed(), vec![12]);
}

#[test]
fn test_terminate_scans_process_table_once() {
    let host = FakeHost::new().with_process(10, "/zurg/RD/zurg --preload");
    terminate(&host);
    assert_eq!(host.count(|e| *e == Event::Scan), 1);
}

#[test]
fn test_find_matching_lists_without_killing() {
    let host = FakeHost::new()
        .with_process(10, "/zurg/RD/zurg --preload")
        .with_process(11, "/zurg/AD/zurg --preload");

    let found = find_matching(&host, Path::new(RD)).expect("pattern builds");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].pid, 10);
    assert_eq!(found[0].command_line, "/zurg/RD/zurg --preload");
    assert!(host.killed().is_empty());
}
