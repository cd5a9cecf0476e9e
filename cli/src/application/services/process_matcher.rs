//! Application service: find and terminate the processes of one instance.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::application::ports::ProcessTable;
use crate::domain::{IdentityTag, InstancePattern, RunningProcess};

/// Kill every process whose command line identifies it as the instance
/// running from `scope`.
///
/// Processes that vanish, turn out to be zombies, or refuse inspection or the
/// kill signal are skipped; enumeration always runs to the end. Returns the
/// number of processes successfully killed.
///
/// # Errors
///
/// Returns an error only if the match pattern cannot be built.
pub fn terminate_matching(
    table: &impl ProcessTable,
    scope: &Path,
    tag: IdentityTag,
) -> Result<usize> {
    let pattern = InstancePattern::for_scope(scope)?;
    debug!(instance = %tag, "attempting to terminate zurg processes");

    let mut found = false;
    let mut killed = 0;
    for pid in table.pids() {
        let process = match table.inspect(pid) {
            Ok(process) => process,
            Err(fault) => {
                debug!(pid, %fault, "skipping process");
                continue;
            }
        };
        debug!(pid, command_line = %process.command_line, "checking process");
        if !pattern.is_match(&process.command_line) {
            continue;
        }
        found = true;
        match table.kill(pid) {
            Ok(()) => {
                killed += 1;
                debug!(pid, command_line = %process.command_line, "terminated zurg process");
            }
            Err(fault) => debug!(pid, %fault, "could not terminate process"),
        }
    }

    if !found {
        debug!(instance = %tag, "no matching zurg processes found");
    }
    Ok(killed)
}

/// List the live processes belonging to the instance at `scope` without
/// touching them.
///
/// # Errors
///
/// Returns an error only if the match pattern cannot be built.
pub fn find_matching(table: &impl ProcessTable, scope: &Path) -> Result<Vec<RunningProcess>> {
    let pattern = InstancePattern::for_scope(scope)?;
    Ok(table
        .pids()
        .into_iter()
        .filter_map(|pid| table.inspect(pid).ok())
        .filter(|p| pattern.is_match(&p.command_line))
        .collect())
}
