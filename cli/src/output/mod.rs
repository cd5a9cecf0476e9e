//! Terminal output for cycle reports, instance start-up and status.

pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

use crate::application::services::update::CycleOutcome;
use crate::domain::{IdentityTag, SkipReason};

/// How loudly a line is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Severity of a finished update cycle.
    ///
    /// Fetch errors and aborted cycles are errors; partial applies and a
    /// release staged with nothing to apply it to are warnings.
    #[must_use]
    pub fn of_cycle(outcome: &CycleOutcome) -> Self {
        match outcome {
            CycleOutcome::Skipped(SkipReason::FetchError(_)) | CycleOutcome::Failed(_) => {
                Self::Error
            }
            CycleOutcome::Skipped(_) => Self::Info,
            CycleOutcome::NoInstances { .. } => Self::Warn,
            CycleOutcome::Applied { failed, .. } if !failed.is_empty() => Self::Warn,
            CycleOutcome::Applied { .. } => Self::Success,
        }
    }
}

/// Styling and quiet-mode state shared by every command.
pub struct OutputContext {
    pub styles: Styles,
    /// Suppress everything except errors.
    pub quiet: bool,
}

impl OutputContext {
    /// Colors are enabled only on a TTY, and never with `--no-color` or
    /// `NO_COLOR` set.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print a line at the given severity.
    pub fn line(&self, severity: Severity, msg: &str) {
        match severity {
            Severity::Success => self.success(msg),
            Severity::Info => self.info(msg),
            Severity::Warn => self.warn(msg),
            Severity::Error => self.error(msg),
        }
    }

    /// One-line summary of an update cycle.
    pub fn cycle(&self, outcome: &CycleOutcome) {
        self.line(Severity::of_cycle(outcome), &outcome.to_string());
    }

    /// Report a freshly started instance.
    pub fn instance_started(&self, tag: IdentityTag, pid: u32) {
        self.success(&format!(
            "Started zurg w/ {} (pid {pid})",
            self.tag_label(tag)
        ));
    }

    /// An identity tag rendered in the instance style.
    #[must_use]
    pub fn tag_label(&self, tag: IdentityTag) -> String {
        tag.style(self.styles.instance).to_string()
    }

    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Errors go to stderr and ignore `quiet`.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Key dimmed, value plain.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}
