//! Environment configuration loaded with `envy`.
//!
//! Each field maps to the upper-cased environment variable of the same name:
//!   - `GHTOKEN`                (optional, selects the privileged feed)
//!   - `ZURG_VERSION`           (optional, pins the version and disables updates)
//!   - `ZURG_CURRENT_VERSION`   (optional, version currently installed)
//!   - `ZURG_BASE_DIR`          (default `/zurg`)
//!   - `ZURG_UPDATE_INTERVAL`   (hours between watch cycles, default `24`)
//!   - `ZURG_ISOLATE_FAILURES`  (default `false`)

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::UpdateSettings;
use crate::domain::instance::DEFAULT_BASE_DIR;

/// Raw configuration as read from the process environment.
#[derive(Debug, Deserialize)]
pub struct EnvConfig {
    /// GitHub access token.
    pub ghtoken: Option<String>,

    /// Pinned version; non-empty disables automatic updates.
    pub zurg_version: Option<String>,

    /// Version currently installed, maintained by the host system.
    pub zurg_current_version: Option<String>,

    /// Directory holding `RD/`, `AD/` and the staging binary.
    #[serde(default = "default_base_dir")]
    pub zurg_base_dir: PathBuf,

    /// Hours between update cycles in `watch` mode.
    #[serde(default = "default_update_interval")]
    pub zurg_update_interval: u64,

    /// Keep updating later instances when one fails.
    #[serde(default)]
    pub zurg_isolate_failures: bool,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_DIR)
}

fn default_update_interval() -> u64 {
    24
}

impl EnvConfig {
    /// Load from the current process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        envy::from_env().context("failed to load config from ZURG_* / GHTOKEN env vars")
    }

    /// Load from an explicit set of variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).context("failed to load config from ZURG_* / GHTOKEN env vars")
    }

    /// The subset of configuration the update decision depends on.
    #[must_use]
    pub fn update_settings(&self) -> UpdateSettings {
        UpdateSettings::from_raw(
            self.zurg_current_version.clone(),
            self.ghtoken.as_deref(),
            self.zurg_version.clone(),
        )
    }
}
