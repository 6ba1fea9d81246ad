//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitq - Undo and redo across git commit history
#[derive(Parser, Debug)]
#[command(name = "gitq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gitq was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check out a commit, remembering the commits passed over
    #[command(
        name = "checkout",
        visible_alias = "co",
        long_about = "Check out a commit from the current history, remembering the commits \
            passed over so that undo and redo can revisit them.\n\n\
            The commit must appear in `git log` from HEAD and is matched exactly \
            (use the full hash). Targets in the older half of history are reached \
            from the tip, and the commits skipped become available to undo. Any \
            other target is reached from the root, and the commits skipped become \
            available to redo.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Jump to a commit from git log
    gitq checkout 3f2a9c1e4b7d8a0c5e6f1a2b3c4d5e6f7a8b9c0d

    # Step back and forth through the commits passed over
    gitq undo
    gitq redo

    # Forget everything and start over
    gitq reset"
    )]
    Checkout {
        /// Full commit hash to check out
        #[arg(allow_hyphen_values = true)]
        commit: String,
    },

    /// Move to the most recent commit in the backward queue
    #[command(name = "undo")]
    Undo,

    /// Move to the most recent commit in the forward queue
    #[command(name = "redo")]
    Redo,

    /// Empty both queues without touching the working tree
    #[command(name = "reset")]
    Reset,

    /// Show the forward and backward queues
    #[command(name = "status", visible_alias = "st")]
    Status,

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
