//! Managed instance identities and their on-disk layout.
//!
//! This module is intentionally free of I/O. Whether an instance is actually
//! installed is decided by the locator service through the `LocalFs` port.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// File name of the managed executable inside every scope directory.
pub const EXECUTABLE_NAME: &str = "zurg";

/// Command-line token that marks a process as a supervised instance.
pub const LAUNCH_FLAG: &str = "--preload";

/// Default directory holding the instance scopes and the staging binary.
pub const DEFAULT_BASE_DIR: &str = "/zurg";

/// Which backend account an instance is keyed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IdentityTag {
    RealDebrid,
    AllDebrid,
}

impl IdentityTag {
    /// Human-readable label used in logs and output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RealDebrid => "RealDebrid",
            Self::AllDebrid => "AllDebrid",
        }
    }
}

impl fmt::Display for IdentityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed scope-directory → identity table, in apply order.
const KNOWN_SCOPES: [(&str, IdentityTag); 2] = [
    ("RD", IdentityTag::RealDebrid),
    ("AD", IdentityTag::AllDebrid),
];

/// One managed deployment of the executable.
///
/// An `Instance` exists logically whether or not anything is installed in its
/// scope directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    scope: PathBuf,
    tag: IdentityTag,
}

impl Instance {
    #[must_use]
    pub fn new(scope: impl Into<PathBuf>, tag: IdentityTag) -> Self {
        Self {
            scope: scope.into(),
            tag,
        }
    }

    /// Directory the instance runs from.
    #[must_use]
    pub fn scope(&self) -> &Path {
        &self.scope
    }

    #[must_use]
    pub fn tag(&self) -> IdentityTag {
        self.tag
    }

    /// Absolute path of the instance's executable.
    #[must_use]
    pub fn executable(&self) -> PathBuf {
        self.scope.join(EXECUTABLE_NAME)
    }
}

/// Filesystem layout rooted at one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLayout {
    base_dir: PathBuf,
}

impl InstanceLayout {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Where the freshly unpacked executable is placed before it is copied
    /// into each scope.
    #[must_use]
    pub fn staging_binary(&self) -> PathBuf {
        self.base_dir.join(EXECUTABLE_NAME)
    }

    /// Every known instance, installed or not, in apply order.
    #[must_use]
    pub fn known_instances(&self) -> Vec<Instance> {
        KNOWN_SCOPES
            .iter()
            .map(|(dir, tag)| Instance::new(self.base_dir.join(dir), *tag))
            .collect()
    }
}

impl Default for InstanceLayout {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}
