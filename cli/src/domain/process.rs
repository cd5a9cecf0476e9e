//! Process records and the command-line pattern that identifies a managed
//! instance.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

use crate::domain::instance::{EXECUTABLE_NAME, LAUNCH_FLAG};

/// A live OS process as observed at query time. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunningProcess {
    pub pid: u32,
    /// argv joined with single spaces.
    pub command_line: String,
}

impl RunningProcess {
    #[must_use]
    pub fn new(pid: u32, argv: &[String]) -> Self {
        Self {
            pid,
            command_line: argv.join(" "),
        }
    }
}

/// Case-insensitive matcher for `<scope>…zurg…--preload` command lines.
#[derive(Debug, Clone)]
pub struct InstancePattern {
    regex: Regex,
}

impl InstancePattern {
    /// Build the pattern for one scope directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the escaped pattern fails to compile (only possible
    /// for pathologically long scope paths).
    pub fn for_scope(scope: &Path) -> Result<Self> {
        let scope = scope.to_string_lossy();
        let pattern = format!(
            "(?i){}.*{}.*{}",
            regex::escape(&scope),
            regex::escape(EXECUTABLE_NAME),
            regex::escape(LAUNCH_FLAG),
        );
        let regex = Regex::new(&pattern)
            .with_context(|| format!("building process pattern for {scope}"))?;
        Ok(Self { regex })
    }

    #[must_use]
    pub fn is_match(&self, command_line: &str) -> bool {
        self.regex.is_match(command_line)
    }
}
