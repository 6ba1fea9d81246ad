//! redo command - Step forward to the most recently skipped commit

use anyhow::Result;

use super::{report_no_history, Session};
use crate::engine::Context;

/// Move to the most recent commit in the forward queue.
pub fn redo(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx)?;
    let _lock = session.lock()?;

    match session.navigator.redo() {
        Ok(report) => {
            if !session.quiet {
                println!("Redone to {}", report.commit);
            }
            Ok(())
        }
        Err(err) => report_no_history(err),
    }
}
