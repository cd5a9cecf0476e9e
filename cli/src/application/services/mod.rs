//! Application services: one module per use-case.

pub mod instance_locator;
pub mod launcher;
pub mod process_matcher;
pub mod update;
pub mod update_decider;
