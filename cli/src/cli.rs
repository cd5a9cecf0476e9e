//! CLI argument parsing with clap derive

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;

/// Keep zurg instances current with their release feed
#[derive(Parser)]
#[command(
    name = "zurg-updater",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check for a new release and apply it to every installed instance
    Update(commands::update::UpdateArgs),

    /// Check for updates periodically until interrupted
    Watch(commands::watch::WatchArgs),

    /// Start every installed instance
    Start,

    /// Show installed instances and running processes
    Status(commands::status::StatusArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            command,
            ..
        } = self;
        let app = Arc::new(AppContext::new(&OutputFlags { no_color, quiet })?);
        match command {
            Command::Update(args) => commands::update::run(&args, app).await,
            Command::Watch(args) => commands::watch::run(&args, app).await,
            Command::Start => commands::start::run(&app),
            Command::Status(args) => commands::status::run(&args, &app),
        }
    }
}
