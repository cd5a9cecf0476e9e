//! Command implementations

pub mod start;
pub mod status;
pub mod update;
pub mod watch;
