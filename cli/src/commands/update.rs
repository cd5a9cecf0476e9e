//! `zurg-updater update`: run one update cycle.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::services::update::run_update_cycle;

/// Arguments for the update command.
#[derive(Args, Default)]
pub struct UpdateArgs {
    /// Keep updating the remaining instances when one fails
    #[arg(long)]
    pub isolate_failures: bool,
}

/// Run `zurg-updater update`.
///
/// The cycle itself never fails the command: its failures are logged and
/// summarised. The cycle runs on a blocking thread because the release feed
/// uses blocking HTTP clients.
///
/// # Errors
///
/// Returns an error only if the blocking task panics.
pub async fn run(args: &UpdateArgs, app: Arc<AppContext>) -> Result<()> {
    let policy = app.failure_policy(args.isolate_failures);
    let settings = app.settings.clone();
    let worker = Arc::clone(&app);
    let outcome = tokio::task::spawn_blocking(move || {
        run_update_cycle(&worker.feed, &worker.host(), &settings, policy)
    })
    .await
    .context("update cycle task panicked")?;

    app.output.cycle(&outcome);
    Ok(())
}
