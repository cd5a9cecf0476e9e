//! Application service: decide whether a cycle should update.

use tracing::{debug, info};

use crate::application::ports::ReleaseFeed;
use crate::domain::release::is_up_to_date;
use crate::domain::{Decision, FeedIdentity, SkipReason, UpdateSettings};

/// Decide whether to apply the latest release.
///
/// A pinned version wins over everything and short-circuits before any
/// network call. Otherwise the latest release is fetched from the feed
/// selected by token presence and compared by exact string equality with
/// the installed version.
pub fn decide(settings: &UpdateSettings, feed: &impl ReleaseFeed) -> Decision {
    if let Some(pinned) = &settings.pinned_version {
        return Decision::Skip(SkipReason::Pinned(pinned.clone()));
    }

    let identity = FeedIdentity::select(settings.has_token);
    let latest = match feed.latest_release(&identity) {
        Ok(latest) => latest,
        Err(e) => return Decision::Skip(SkipReason::FetchError(format!("{e:#}"))),
    };

    info!(
        current = settings.current_version.as_deref().unwrap_or("unknown"),
        "zurg current version"
    );
    debug!(latest = %latest, feed = %identity, "zurg latest available version");

    if is_up_to_date(settings.current_version.as_deref(), &latest) {
        return Decision::Skip(SkipReason::UpToDate(latest));
    }
    Decision::Proceed {
        feed: identity,
        latest_version: latest,
    }
}
