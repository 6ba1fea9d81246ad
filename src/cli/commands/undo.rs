//! undo command - Step back to the most recently skipped commit

use anyhow::Result;

use super::{report_no_history, Session};
use crate::engine::Context;

/// Move to the most recent commit in the backward queue.
pub fn undo(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx)?;
    let _lock = session.lock()?;

    match session.navigator.undo() {
        Ok(report) => {
            if !session.quiet {
                println!("Undone to {}", report.commit);
            }
            Ok(())
        }
        Err(err) => report_no_history(err),
    }
}
