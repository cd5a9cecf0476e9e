//! Domain layer: pure types, validation and matching rules.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod instance;
pub mod process;
pub mod release;

pub use error::{ProcessFault, UpdateError};
pub use instance::{IdentityTag, Instance, InstanceLayout};
pub use process::{InstancePattern, RunningProcess};
pub use release::{Decision, FeedIdentity, SkipReason, UpdateSettings};
