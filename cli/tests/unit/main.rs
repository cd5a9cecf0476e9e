//! Unit tests for zurg-updater
//!
//! These tests use in-memory port doubles and run fast without external I/O.

mod process_matcher;
mod property_tests;
mod status_command;
mod update_decider;
