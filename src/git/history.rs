//! git::history
//!
//! Linear history snapshots.
//!
//! A snapshot is the newest-first list of commits reachable from HEAD, as
//! printed by `git log --pretty=format:%H`. Snapshots are taken fresh for
//! every checkout and never stored.

use crate::core::types::CommitId;

use super::exec::{ExecError, Executor};

/// Arguments that list HEAD's history, one full hash per line, newest first.
pub const LOG_ARGS: [&str; 2] = ["log", "--pretty=format:%H"];

/// Supplies history snapshots.
pub trait HistoryProvider {
    /// Commits reachable from HEAD, newest first.
    fn list_commits(&self) -> Result<Vec<CommitId>, ExecError>;
}

/// History provider that asks git via an [`Executor`].
#[derive(Debug, Clone)]
pub struct LogHistory<E> {
    exec: E,
}

impl<E: Executor> LogHistory<E> {
    pub fn new(exec: E) -> Self {
        Self { exec }
    }
}

impl<E: Executor> HistoryProvider for LogHistory<E> {
    fn list_commits(&self) -> Result<Vec<CommitId>, ExecError> {
        let output = self.exec.run(&LOG_ARGS)?;
        parse_log(&output)
    }
}

/// Parse `git log --pretty=format:%H` output.
///
/// Blank lines are skipped, so empty output is an empty history.
pub fn parse_log(output: &str) -> Result<Vec<CommitId>, ExecError> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            CommitId::new(line).map_err(|e| ExecError::BadOutput {
                args: LOG_ARGS.join(" "),
                message: e.to_string(),
            })
        })
        .collect()
}
