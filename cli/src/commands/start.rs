//! `zurg-updater start`: start every installed instance.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::update::start_installed_instances;

/// Run `zurg-updater start`.
///
/// # Errors
///
/// Returns an error if instances are installed but none could be started.
pub fn run(app: &AppContext) -> Result<()> {
    let host = app.host();
    let installed = host.installed().len();
    let started = start_installed_instances(&host);

    if installed == 0 {
        app.output.warn("No zurg instances installed");
        return Ok(());
    }
    for (tag, pid) in &started {
        app.output.instance_started(*tag, *pid);
    }
    anyhow::ensure!(!started.is_empty(), "failed to start any zurg instance");
    if started.len() < installed {
        app.output
            .warn(&format!("{} of {installed} instances failed to start", installed - started.len()));
    }
    Ok(())
}
