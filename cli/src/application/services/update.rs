//! Application service: the update cycle and instance start-up.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! Cycle state machine: `Idle → Deciding → {Skipped | Fetching →
//! Applying(1..N) → Done}`. Any state can fault into `Failed`, which ends
//! the current cycle only.

use std::fmt;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::application::ports::{LocalFs, ProcessSpawner, ProcessTable, ReleaseFeed};
use crate::application::services::{instance_locator, launcher, process_matcher, update_decider};
use crate::domain::{
    Decision, FeedIdentity, IdentityTag, Instance, InstanceLayout, SkipReason, UpdateSettings,
};

// ── Public types ──────────────────────────────────────────────────────────────

/// What to do when replacing one instance fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the cycle; later instances are not attempted.
    #[default]
    StopOnFirst,
    /// Record the failure and carry on with the next instance.
    Isolate,
}

/// How a cycle ended. A cycle never returns an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Nothing was downloaded.
    Skipped(SkipReason),
    /// The release was staged but no instance is installed.
    NoInstances { version: String },
    /// The release was applied to every installed instance that did not fail.
    Applied {
        version: String,
        updated: Vec<IdentityTag>,
        failed: Vec<(IdentityTag, String)>,
    },
    /// The cycle aborted; the message carries the full error chain.
    Failed(String),
}

impl CycleOutcome {
    /// The version now staged and installed everywhere, if the cycle
    /// completed cleanly.
    #[must_use]
    pub fn installed_version(&self) -> Option<&str> {
        match self {
            Self::NoInstances { version } => Some(version.as_str()),
            Self::Applied {
                version, failed, ..
            } if failed.is_empty() => Some(version.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped(reason) => write!(f, "skipped: {reason}"),
            Self::NoInstances { version } => {
                write!(f, "staged {version}; no zurg instances installed")
            }
            Self::Applied {
                version,
                updated,
                failed,
            } => {
                write!(f, "updated to {version}: {}", join_tags(updated))?;
                if !failed.is_empty() {
                    let tags: Vec<_> = failed.iter().map(|(tag, _)| *tag).collect();
                    write!(f, " (failed: {})", join_tags(&tags))?;
                }
                Ok(())
            }
            Self::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

fn join_tags(tags: &[IdentityTag]) -> String {
    if tags.is_empty() {
        return "none".to_string();
    }
    tags.iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The host-side collaborators an update touches.
pub struct InstanceHost<'a, P, F, S> {
    pub processes: &'a P,
    pub fs: &'a F,
    pub spawner: &'a S,
    pub layout: &'a InstanceLayout,
}

impl<P, F, S> InstanceHost<'_, P, F, S>
where
    P: ProcessTable,
    F: LocalFs,
    S: ProcessSpawner,
{
    /// Installed instances, in apply order.
    #[must_use]
    pub fn installed(&self) -> Vec<Instance> {
        instance_locator::list_installed_instances(self.fs, self.layout)
    }

    /// Terminate, replace and restart one instance. Returns the new PID.
    ///
    /// # Errors
    ///
    /// Returns an error if the copy or the restart fails.
    pub fn replace(&self, instance: &Instance) -> Result<u32> {
        process_matcher::terminate_matching(self.processes, instance.scope(), instance.tag())?;

        let staged = self.layout.staging_binary();
        let target = instance.executable();
        self.fs
            .replace_file(&staged, &target)
            .with_context(|| format!("copying {} to {}", staged.display(), target.display()))?;

        launcher::start(self.spawner, instance)
    }
}

// ── Update cycle ──────────────────────────────────────────────────────────────

/// Run one update cycle.
///
/// Decides, stages the latest release, then terminates, replaces and
/// restarts each installed instance in order. Every failure is logged and
/// reported in the returned outcome; nothing is propagated to the caller.
pub fn run_update_cycle<P, F, S>(
    feed: &impl ReleaseFeed,
    host: &InstanceHost<'_, P, F, S>,
    settings: &UpdateSettings,
    policy: FailurePolicy,
) -> CycleOutcome
where
    P: ProcessTable,
    F: LocalFs,
    S: ProcessSpawner,
{
    let (identity, version) = match update_decider::decide(settings, feed) {
        Decision::Skip(reason) => {
            log_skip(&reason);
            return CycleOutcome::Skipped(reason);
        }
        Decision::Proceed {
            feed,
            latest_version,
        } => (feed, latest_version),
    };

    info!(version = %version, "a new version of zurg is available; applying updates");
    if let Err(e) = stage_release(feed, &identity, &version) {
        let message = format!("{e:#}");
        error!(error = %message, "an error occurred in update cycle");
        return CycleOutcome::Failed(message);
    }

    let instances = host.installed();
    if instances.is_empty() {
        info!(version = %version, "no zurg instances installed; nothing to apply");
        return CycleOutcome::NoInstances { version };
    }

    let mut updated = Vec::new();
    let mut failed = Vec::new();
    for instance in &instances {
        match host.replace(instance) {
            Ok(_) => updated.push(instance.tag()),
            Err(e) => {
                let message = format!("{e:#}");
                error!(instance = %instance.tag(), error = %message, "an error occurred in update cycle");
                match policy {
                    FailurePolicy::StopOnFirst => return CycleOutcome::Failed(message),
                    FailurePolicy::Isolate => failed.push((instance.tag(), message)),
                }
            }
        }
    }

    CycleOutcome::Applied {
        version,
        updated,
        failed,
    }
}

fn stage_release(feed: &impl ReleaseFeed, identity: &FeedIdentity, version: &str) -> Result<()> {
    let arch = feed.architecture().context("resolving host architecture")?;
    feed.download_and_unpack(identity, version, &arch)
        .context("failed to download and extract the release")
}

fn log_skip(reason: &SkipReason) {
    match reason {
        SkipReason::Pinned(version) => info!(
            version = %version,
            "ZURG_VERSION is set; automatic updates will not be applied"
        ),
        SkipReason::FetchError(e) => error!(error = %e, "failed to fetch the latest zurg release"),
        SkipReason::UpToDate(_) => info!("zurg is already up to date"),
    }
}

// ── Start-up ──────────────────────────────────────────────────────────────────

/// Start every installed instance without updating.
///
/// A failing instance is logged and skipped. Returns the instances that
/// started with their PIDs.
pub fn start_installed_instances<P, F, S>(
    host: &InstanceHost<'_, P, F, S>,
) -> Vec<(IdentityTag, u32)>
where
    P: ProcessTable,
    F: LocalFs,
    S: ProcessSpawner,
{
    let instances = host.installed();
    if instances.is_empty() {
        warn!("no zurg instances installed");
    }
    instances
        .iter()
        .filter_map(|instance| match launcher::start(host.spawner, instance) {
            Ok(pid) => Some((instance.tag(), pid)),
            Err(e) => {
                let message = format!("{e:#}");
                error!(instance = %instance.tag(), error = %message, "failed to start zurg");
                None
            }
        })
        .collect()
}
