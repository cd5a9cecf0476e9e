//! Tests for `status` report collection.

#![allow(clippy::expect_used)]

use zurg_updater::commands::status::collect;
use zurg_updater::domain::{IdentityTag, InstanceLayout, UpdateSettings};

use crate::mocks::FakeHost;

#[test]
fn test_collect_reports_installed_and_running_per_instance() {
    let host = FakeHost::new()
        .with_file("/zurg/RD/zurg")
        .with_process(42, "/zurg/RD/zurg --preload");
    let settings = UpdateSettings {
        current_version: Some("v0.9.3".into()),
        has_token: true,
        pinned_version: None,
    };

    let report = collect(&settings, &InstanceLayout::default(), &host, &host).expect("report");

    assert_eq!(report.current_version.as_deref(), Some("v0.9.3"));
    assert_eq!(report.feed.repo, "zurg");
    assert_eq!(report.instances.len(), 2);

    let rd = &report.instances[0];
    assert_eq!(rd.identity, IdentityTag::RealDebrid);
    assert!(rd.installed);
    assert_eq!(rd.processes.len(), 1);
    assert_eq!(rd.processes[0].pid, 42);

    let ad = &report.instances[1];
    assert_eq!(ad.identity, IdentityTag::AllDebrid);
    assert!(!ad.installed);
    assert!(ad.processes.is_empty());
    assert!(host.killed().is_empty());
}

#[test]
fn test_collect_serializes_to_json() {
    let host = FakeHost::new();
    let report = collect(
        &UpdateSettings::default(),
        &InstanceLayout::default(),
        &host,
        &host,
    )
    .expect("report");

    let json = serde_json::to_value(&report).expect("json");
    assert_eq!(json["feed"]["repo"], "zurg-testing");
    assert_eq!(json["instances"][0]["identity"], "RealDebrid");
    assert_eq!(json["instances"][1]["scope"], "/zurg/AD");
    assert!(json["current_version"].is_null());
}
