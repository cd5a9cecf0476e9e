//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: release downloads, process
//! table access, filesystem replacement, and process spawning.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod fs;
pub mod process_table;
pub mod release_feed;
pub mod spawner;
