//! checkout command - Check out a commit and remember what was skipped

use anyhow::Result;

use super::{print_queues, Session};
use crate::core::types::CommitId;
use crate::engine::{Context, NavError};

/// Check out `commit`, recording the commits passed over.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `commit` - Full id of a commit reachable from HEAD
///
/// A malformed id can never appear in history, so it is reported as not
/// found without consulting git.
pub fn checkout(ctx: &Context, commit: &str) -> Result<()> {
    let session = Session::open(ctx)?;
    let target = CommitId::new(commit).map_err(|_| NavError::CommitNotFound {
        commit: commit.to_string(),
    })?;
    let _lock = session.lock()?;

    let report = session.navigator.checkout(&target)?;

    if !session.quiet {
        println!("Checked out to {}", report.target);
        if session.config.show_queues() {
            print_queues(&report.queues);
        }
    }

    Ok(())
}
