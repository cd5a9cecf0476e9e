//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.
//!
//! Every port is synchronous: an update cycle runs to completion on one
//! thread and each step blocks.

use std::path::Path;

use anyhow::Result;

use crate::domain::{FeedIdentity, ProcessFault, RunningProcess};

// ── Release Feed Port ─────────────────────────────────────────────────────────

/// Abstraction over the upstream release feed, enabling test doubles.
pub trait ReleaseFeed {
    /// Fetch the identifier of the latest release on `feed`.
    ///
    /// # Errors
    ///
    /// Returns an error on any network, auth or parse failure.
    fn latest_release(&self, feed: &FeedIdentity) -> Result<String>;

    /// Platform suffix of the release asset matching this host.
    ///
    /// # Errors
    ///
    /// Returns an error if the host platform has no published build.
    fn architecture(&self) -> Result<String>;

    /// Download the `arch` artifact of `version` and leave a ready-to-copy
    /// executable at the staging path.
    ///
    /// # Errors
    ///
    /// Returns an error if the download, extraction or staging fails.
    fn download_and_unpack(&self, feed: &FeedIdentity, version: &str, arch: &str) -> Result<()>;
}

// ── Process Table Port ────────────────────────────────────────────────────────

/// Abstracts the OS process table.
///
/// Every lookup may race with the process exiting; implementations report
/// that as a [`ProcessFault`] instead of an error.
pub trait ProcessTable {
    /// Snapshot the PIDs of every live process.
    fn pids(&self) -> Vec<u32>;
    /// Read the argv of one process.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessFault`] if the process vanished, is a zombie, or
    /// cannot be inspected.
    fn inspect(&self, pid: u32) -> std::result::Result<RunningProcess, ProcessFault>;
    /// Forcefully terminate one process.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessFault`] if the process vanished, is a zombie, or
    /// cannot be signalled.
    fn kill(&self, pid: u32) -> std::result::Result<(), ProcessFault>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the filesystem operations the update cycle performs.
pub trait LocalFs {
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;
    /// Replace `to` with a copy of `from`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` cannot be read or `to` cannot be written.
    fn replace_file(&self, from: &Path, to: &Path) -> Result<()>;
}

// ── Process Spawner Port ──────────────────────────────────────────────────────

/// Abstracts launching long-lived child processes.
pub trait ProcessSpawner {
    /// Start `program` with `args` in `cwd`, detached from the caller's
    /// lifetime. Returns the new PID.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn spawn_detached(&self, program: &Path, args: &[String], cwd: &Path) -> Result<u32>;
}
