//! Tests for the `update_decider` application service.

#![allow(clippy::expect_used)]

use zurg_updater::application::services::update_decider::decide;
use zurg_updater::domain::{Decision, FeedIdentity, SkipReason, UpdateSettings};

use crate::mocks::{MockFeed, silent_feed};

fn settings(current: Option<&str>, has_token: bool, pinned: Option<&str>) -> UpdateSettings {
    UpdateSettings {
        current_version: current.map(str::to_string),
        has_token,
        pinned_version: pinned.map(str::to_string),
    }
}

fn feed_for_repo(repo: &'static str, latest: &'static str) -> MockFeed {
    let mut feed = MockFeed::new();
    feed.expect_latest_release()
        .withf(move |f| f.owner == "debridmediamanager" && f.repo == repo)
        .times(1)
        .returning(move |_| Ok(latest.to_string()));
    feed
}

#[test]
fn test_decide_pinned_skips_without_contacting_feed() {
    let decision = decide(&settings(Some("v1"), true, Some("v0.9.0")), &silent_feed());
    assert_eq!(decision, Decision::Skip(SkipReason::Pinned("v0.9.0".into())));
}

#[test]
fn test_decide_with_token_uses_privileged_feed() {
    let decision = decide(&settings(Some("v1"), true, None), &feed_for_repo("zurg", "v2"));
    assert_eq!(
        decision,
        Decision::Proceed {
            feed: FeedIdentity::select(true),
            latest_version: "v2".into(),
        }
    );
}

#[test]
fn test_decide_without_token_uses_public_feed() {
    let decision = decide(
        &settings(Some("v1"), false, None),
        &feed_for_repo("zurg-testing", "v2"),
    );
    assert!(matches!(
        decision,
        Decision::Proceed { ref feed, .. } if feed.repo == "zurg-testing"
    ));
}

#[test]
fn test_decide_fetch_error_skips_with_message() {
    let mut feed = MockFeed::new();
    feed.expect_latest_release()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("API rate limit exceeded")));

    let decision = decide(&settings(Some("v1"), false, None), &feed);
    let Decision::Skip(SkipReason::FetchError(message)) = decision else {
        panic!("expected fetch error, got {decision:?}");
    };
    assert!(message.contains("rate limit"));
}

#[test]
fn test_decide_equal_versions_is_up_to_date() {
    let decision = decide(
        &settings(Some("v0.9.3"), false, None),
        &feed_for_repo("zurg-testing", "v0.9.3"),
    );
    assert_eq!(decision, Decision::Skip(SkipReason::UpToDate("v0.9.3".into())));
}

#[test]
fn test_decide_unknown_current_version_always_proceeds() {
    let decision = decide(
        &settings(None, false, None),
        &feed_for_repo("zurg-testing", "v0.9.3"),
    );
    assert!(matches!(decision, Decision::Proceed { .. }));
}

#[test]
fn test_decide_older_latest_still_proceeds() {
    // Versions are opaque: any difference triggers an update, even "downgrades".
    let decision = decide(
        &settings(Some("v0.9.4"), false, None),
        &feed_for_repo("zurg-testing", "v0.9.3"),
    );
    assert!(matches!(
        decision,
        Decision::Proceed { ref latest_version, .. } if latest_version == "v0.9.3"
    ));
}
