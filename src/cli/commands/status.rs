//! status command - Show HEAD and both queues

use anyhow::{Context as _, Result};

use super::{print_queues, Session};
use crate::engine::Context;

/// Show where HEAD is and what undo and redo would visit next.
///
/// Read-only: takes no lock and never runs git checkout.
pub fn status(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx)?;
    let head = session.git.head().context("Failed to read HEAD")?;
    let queues = session.navigator.status()?;

    if session.quiet {
        print_queues(&queues);
        return Ok(());
    }

    println!("HEAD: {}", head);
    print_queues(&queues);

    match queues.backward.peek() {
        Some(next) => println!("Next undo: {}", next.short(7)),
        None => println!("Next undo: (none)"),
    }
    match queues.forward.peek() {
        Some(next) => println!("Next redo: {}", next.short(7)),
        None => println!("Next redo: (none)"),
    }

    println!("State directory: {}", session.navigator.store().dir().display());
    if let Some(path) = session.config.global_config_loaded_from() {
        println!("Global config: {}", path.display());
    }
    if let Some(path) = session.config.repo_config_loaded_from() {
        println!("Repo config: {}", path.display());
    }

    Ok(())
}
