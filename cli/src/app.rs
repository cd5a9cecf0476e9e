//! Application context: unified state passed to every command handler.
//!
//! Built once in `Cli::run()` from the environment configuration and the
//! top-level flags, then passed as `&AppContext` to all command handlers.

use anyhow::Result;

use crate::application::services::update::{FailurePolicy, InstanceHost};
use crate::domain::{InstanceLayout, UpdateSettings};
use crate::infra::config::EnvConfig;
use crate::infra::fs::LocalFs;
use crate::infra::process_table::SysinfoProcessTable;
use crate::infra::release_feed::GithubReleaseFeed;
use crate::infra::spawner::DetachedSpawner;
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Raw environment configuration.
    pub config: EnvConfig,
    /// Version facts the update decision reads.
    pub settings: UpdateSettings,
    /// Where instances and the staging binary live.
    pub layout: InstanceLayout,
    /// GitHub release feed.
    pub feed: GithubReleaseFeed,
    /// OS process table.
    pub processes: SysinfoProcessTable,
    /// Local filesystem.
    pub fs: LocalFs,
    /// Detached process launcher.
    pub spawner: DetachedSpawner,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment configuration cannot be parsed.
    pub fn new(flags: &OutputFlags) -> Result<Self> {
        Ok(Self::from_config(EnvConfig::from_env()?, flags))
    }

    /// Construct an `AppContext` from an already loaded configuration.
    #[must_use]
    pub fn from_config(config: EnvConfig, flags: &OutputFlags) -> Self {
        let layout = InstanceLayout::new(&config.zurg_base_dir);
        let feed = GithubReleaseFeed::new(layout.staging_binary(), config.ghtoken.clone());
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            settings: config.update_settings(),
            layout,
            feed,
            processes: SysinfoProcessTable::new(),
            fs: LocalFs,
            spawner: DetachedSpawner,
            config,
        }
    }

    /// Failure policy from configuration, forced to `Isolate` by `isolate`.
    #[must_use]
    pub fn failure_policy(&self, isolate: bool) -> FailurePolicy {
        if isolate || self.config.zurg_isolate_failures {
            FailurePolicy::Isolate
        } else {
            FailurePolicy::StopOnFirst
        }
    }

    /// The host collaborators an update cycle touches.
    #[must_use]
    pub fn host(&self) -> InstanceHost<'_, SysinfoProcessTable, LocalFs, DetachedSpawner> {
        InstanceHost {
            processes: &self.processes,
            fs: &self.fs,
            spawner: &self.spawner,
            layout: &self.layout,
        }
    }
}
