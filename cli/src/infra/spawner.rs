//! Infrastructure implementation of the `ProcessSpawner` port.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::ProcessSpawner;

/// Launches children in their own process group so they survive the
/// updater, and reaps them on a background thread when they exit.
pub struct DetachedSpawner;

impl ProcessSpawner for DetachedSpawner {
    fn spawn_detached(&self, program: &Path, args: &[String], cwd: &Path) -> Result<u32> {
        let mut command = Command::new(program);
        command.args(args).current_dir(cwd).stdin(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let mut child = command
            .spawn()
            .with_context(|| format!("failed to spawn {}", program.display()))?;
        let pid = child.id();

        std::thread::Builder::new()
            .name(format!("reap-{pid}"))
            .spawn(move || {
                let _ = child.wait();
            })
            .context("spawning reaper thread")?;
        Ok(pid)
    }
}
