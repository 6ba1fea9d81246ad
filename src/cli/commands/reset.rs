//! reset command - Forget both queues

use anyhow::{Context as _, Result};

use super::Session;
use crate::engine::Context;

/// Empty both queues. The working tree is left alone.
pub fn reset(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx)?;
    let _lock = session.lock()?;

    session
        .navigator
        .reset()
        .context("Failed to reset queues")?;

    if !session.quiet {
        println!("Git queues reset.");
    }
    Ok(())
}
