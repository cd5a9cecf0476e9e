//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Process inspection faults ─────────────────────────────────────────────────

/// Expected, transient failures while inspecting or killing a process.
///
/// Every variant means "skip this process and keep going".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProcessFault {
    #[error("process no longer exists")]
    Gone,

    #[error("access denied")]
    Denied,

    #[error("process is a zombie")]
    Zombie,
}

// ── Update errors ─────────────────────────────────────────────────────────────

/// Errors raised while fetching and staging a release.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("unsupported platform: {os}-{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("release feed {0} has no releases")]
    NoReleases(String),

    #[error("release {version} has no asset for {arch}")]
    MissingAsset { version: String, arch: String },

    #[error("release {version} not found in feed")]
    ReleaseNotFound { version: String },

    #[error("release archive exceeds the {limit} byte download limit")]
    ArchiveTooLarge { limit: u64 },
}
