//! `zurg-updater status`: show installed instances and their processes.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::ports::{LocalFs, ProcessTable};
use crate::application::services::process_matcher::find_matching;
use crate::domain::{FeedIdentity, IdentityTag, InstanceLayout, RunningProcess, UpdateSettings};

/// Arguments for the status command.
#[derive(Args, Default)]
pub struct StatusArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Snapshot of one known instance.
#[derive(Debug, Serialize)]
pub struct InstanceStatus {
    pub identity: IdentityTag,
    pub scope: String,
    pub installed: bool,
    pub processes: Vec<RunningProcess>,
}

/// Snapshot of the whole host.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub current_version: Option<String>,
    pub pinned_version: Option<String>,
    pub feed: FeedIdentity,
    pub instances: Vec<InstanceStatus>,
}

/// Collect the status of every known instance.
///
/// # Errors
///
/// Returns an error if a process pattern cannot be built.
pub fn collect(
    settings: &UpdateSettings,
    layout: &InstanceLayout,
    fs: &impl LocalFs,
    processes: &impl ProcessTable,
) -> Result<StatusReport> {
    let instances = layout
        .known_instances()
        .into_iter()
        .map(|instance| -> Result<InstanceStatus> {
            Ok(InstanceStatus {
                identity: instance.tag(),
                scope: instance.scope().display().to_string(),
                installed: fs.exists(&instance.executable()),
                processes: find_matching(processes, instance.scope())?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StatusReport {
        current_version: settings.current_version.clone(),
        pinned_version: settings.pinned_version.clone(),
        feed: FeedIdentity::select(settings.has_token),
        instances,
    })
}

/// Run `zurg-updater status`.
///
/// # Errors
///
/// Returns an error if the report cannot be collected or serialised.
pub fn run(args: &StatusArgs, app: &AppContext) -> Result<()> {
    let report = collect(&app.settings, &app.layout, &app.fs, &app.processes)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let out = &app.output;
    out.header("zurg");
    out.kv(
        "current version:",
        report.current_version.as_deref().unwrap_or("unknown"),
    );
    out.kv(
        "pinned version: ",
        report.pinned_version.as_deref().unwrap_or("none"),
    );
    out.kv("release feed:   ", &report.feed.to_string());

    for instance in &report.instances {
        let label = format!("{} ({})", out.tag_label(instance.identity), instance.scope);
        if !instance.installed {
            out.info(&format!("{label}: not installed"));
        } else if instance.processes.is_empty() {
            out.warn(&format!("{label}: installed, not running"));
        } else {
            let pids: Vec<String> = instance.processes.iter().map(|p| p.pid.to_string()).collect();
            out.success(&format!("{label}: running (pid {})", pids.join(", ")));
        }
    }
    Ok(())
}
