//! Property-based tests for the update decision.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use zurg_updater::application::services::update_decider::decide;
use zurg_updater::domain::{Decision, FeedIdentity, SkipReason, UpdateSettings};

use crate::mocks::{MockFeed, silent_feed};

fn feed_returning(latest: String) -> MockFeed {
    let mut feed = MockFeed::new();
    feed.expect_latest_release()
        .times(1)
        .returning(move |_| Ok(latest.clone()));
    feed
}

proptest! {
    #[test]
    fn prop_pin_always_skips(
        pin in "[a-z0-9.-]{1,12}",
        current in proptest::option::of("[a-z0-9.]{0,8}"),
        has_token in any::<bool>(),
    ) {
        let settings = UpdateSettings {
            current_version: current,
            has_token,
            pinned_version: Some(pin.clone()),
        };
        prop_assert_eq!(decide(&settings, &silent_feed()), Decision::Skip(SkipReason::Pinned(pin)));
    }

    #[test]
    fn prop_equal_versions_skip(version in "v[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}") {
        let settings = UpdateSettings {
            current_version: Some(version.clone()),
            ..UpdateSettings::default()
        };
        prop_assert_eq!(
            decide(&settings, &feed_returning(version.clone())),
            Decision::Skip(SkipReason::UpToDate(version))
        );
    }

    #[test]
    fn prop_different_versions_proceed(
        current in proptest::option::of("v[0-9]{1,2}\\.[0-9]{1,2}"),
        latest in "v[0-9]{1,2}\\.[0-9]{1,2}",
        has_token in any::<bool>(),
    ) {
        prop_assume!(current.as_deref() != Some(latest.as_str()));
        let settings = UpdateSettings {
            current_version: current,
            has_token,
            pinned_version: None,
        };
        prop_assert_eq!(
            decide(&settings, &feed_returning(latest.clone())),
            Decision::Proceed {
                feed: FeedIdentity::select(has_token),
                latest_version: latest,
            }
        );
    }
}
