//! `zurg-updater watch`: run update cycles on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::app::AppContext;
use crate::application::services::update::run_update_cycle;

/// Arguments for the watch command.
#[derive(Args, Default)]
pub struct WatchArgs {
    /// Hours between update checks [default: $ZURG_UPDATE_INTERVAL or 24]
    #[arg(long)]
    pub interval_hours: Option<u64>,

    /// Keep updating the remaining instances when one fails
    #[arg(long)]
    pub isolate_failures: bool,
}

/// Run `zurg-updater watch` until interrupted.
///
/// The first cycle runs immediately. Each cycle is awaited before the next
/// tick, so cycles never overlap. Ctrl-C is honoured between cycles only.
/// After a cycle that installed a release everywhere, later cycles compare
/// against that version.
///
/// # Errors
///
/// Returns an error if the interval is zero or a cycle task panics.
pub async fn run(args: &WatchArgs, app: Arc<AppContext>) -> Result<()> {
    let hours = args
        .interval_hours
        .unwrap_or(app.config.zurg_update_interval);
    anyhow::ensure!(hours > 0, "update interval must be at least one hour");

    let policy = app.failure_policy(args.isolate_failures);
    let mut settings = app.settings.clone();
    let mut ticker = tokio::time::interval(Duration::from_secs(hours.saturating_mul(3600)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(hours, "watching for zurg updates");

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted; stopping watch");
                return Ok(());
            }
        }

        let worker = Arc::clone(&app);
        let cycle_settings = settings.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            run_update_cycle(&worker.feed, &worker.host(), &cycle_settings, policy)
        })
        .await
        .context("update cycle task panicked")?;

        if let Some(version) = outcome.installed_version() {
            settings.current_version = Some(version.to_string());
        }
        app.output.cycle(&outcome);
    }
}
