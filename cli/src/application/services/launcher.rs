//! Application service: bring one instance up.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::ProcessSpawner;
use crate::domain::Instance;

/// Start `instance` as a detached process running from its scope directory.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned.
pub fn start(spawner: &impl ProcessSpawner, instance: &Instance) -> Result<u32> {
    let executable = instance.executable();
    let pid = spawner
        .spawn_detached(&executable, &[], instance.scope())
        .with_context(|| format!("starting zurg w/ {} instance", instance.tag()))?;
    info!(pid, instance = %instance.tag(), path = %executable.display(), "started zurg");
    Ok(pid)
}
