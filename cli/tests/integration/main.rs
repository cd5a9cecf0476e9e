//! Integration tests for zurg-updater
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! None of them reach the network: every cycle they trigger is pinned.

mod cli_tests;
mod start_command;
