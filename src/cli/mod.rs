//! cli
//!
//! Command-line interface layer for gitq.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT read or write queue files directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! [`crate::engine`] for execution. All queue changes flow through the
//! engine's [`Navigator`](crate::engine::Navigator).

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use crate::engine;
use anyhow::Result;
use clap::CommandFactory;

/// Run the CLI application with already-parsed arguments.
///
/// This is the main entry point called from `main.rs`. A bare `gitq`
/// prints help and succeeds.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = engine::Context {
        cwd: cli.cwd.clone(),
        quiet: cli.quiet,
    };

    match cli.command {
        Some(command) => commands::dispatch(command, &ctx),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
