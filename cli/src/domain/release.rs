//! Release feed identities, update settings and the update decision types.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use std::fmt;

use serde::Serialize;

use crate::domain::error::UpdateError;

const FEED_OWNER: &str = "debridmediamanager";
const PRIVILEGED_REPO: &str = "zurg";
const PUBLIC_REPO: &str = "zurg-testing";

/// A release feed, addressed as a GitHub `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedIdentity {
    pub owner: String,
    pub repo: String,
}

impl FeedIdentity {
    /// Pick the feed for the configured credentials.
    ///
    /// With a token the privileged feed is used; without one, the public
    /// testing feed.
    #[must_use]
    pub fn select(has_token: bool) -> Self {
        let repo = if has_token {
            PRIVILEGED_REPO
        } else {
            PUBLIC_REPO
        };
        Self {
            owner: FEED_OWNER.to_string(),
            repo: repo.to_string(),
        }
    }
}

impl fmt::Display for FeedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Environment-provided facts the update decision depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSettings {
    /// Version currently installed, as recorded by the host system.
    pub current_version: Option<String>,
    /// Whether a GitHub access token is configured.
    pub has_token: bool,
    /// Pinned version. When set, updates are disabled entirely.
    pub pinned_version: Option<String>,
}

impl UpdateSettings {
    /// Build settings from raw environment values, treating empty strings
    /// as unset.
    #[must_use]
    pub fn from_raw(
        current_version: Option<String>,
        token: Option<&str>,
        pinned_version: Option<String>,
    ) -> Self {
        Self {
            current_version: non_empty(current_version),
            has_token: token.is_some_and(|t| !t.is_empty()),
            pinned_version: non_empty(pinned_version),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Why a cycle did not update anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Updates are disabled by a pinned version.
    Pinned(String),
    /// The latest release could not be fetched.
    FetchError(String),
    /// The installed version already equals the latest release.
    UpToDate(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pinned(v) => write!(f, "pinned to {v}"),
            Self::FetchError(e) => write!(f, "fetch error: {e}"),
            Self::UpToDate(v) => write!(f, "up to date ({v})"),
        }
    }
}

/// Result of the update decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip(SkipReason),
    Proceed {
        feed: FeedIdentity,
        latest_version: String,
    },
}

/// Compare installed and latest versions.
///
/// Exact string equality is the only trigger; versions are opaque. An unset
/// current version never equals anything, so it always needs an update.
#[must_use]
pub fn is_up_to_date(current: Option<&str>, latest: &str) -> bool {
    current == Some(latest)
}

/// Map a Rust `(os, arch)` pair to the platform suffix used in release asset
/// names.
///
/// # Errors
///
/// Returns [`UpdateError::UnsupportedPlatform`] for any platform without a
/// published build.
pub fn architecture_tag(os: &str, arch: &str) -> Result<&'static str, UpdateError> {
    let tag = match (os, arch) {
        ("linux", "x86_64") => "linux-amd64",
        ("linux", "aarch64") => "linux-arm64",
        ("macos", "x86_64") => "darwin-amd64",
        ("macos", "aarch64") => "darwin-arm64",
        ("windows", "x86_64") => "windows-amd64",
        _ => {
            return Err(UpdateError::UnsupportedPlatform {
                os: os.to_string(),
                arch: arch.to_string(),
            });
        }
    };
    Ok(tag)
}

/// Whether a release asset is the zip archive for `arch`.
#[must_use]
pub fn is_platform_asset(asset_name: &str, arch: &str) -> bool {
    let name = asset_name.to_ascii_lowercase();
    name.ends_with(".zip") && name.contains(&format!("-{arch}"))
}

/// Release tag for a version as reported by the release list.
#[must_use]
pub fn release_tag(version: &str) -> String {
    if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{version}")
    }
}
