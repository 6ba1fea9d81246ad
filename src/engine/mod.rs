//! engine
//!
//! Navigation logic and the context commands run in.
//!
//! # Architecture
//!
//! The [`Navigator`] owns the queue state machine. It depends only on
//! the [`QueueStore`](crate::core::queue::QueueStore) and the
//! [`HistoryProvider`](crate::git::HistoryProvider) and
//! [`Executor`](crate::git::Executor) traits, so it runs the same against a
//! real repository and against [`MockGit`](crate::git::mock::MockGit).
//!
//! # Invariants
//!
//! - Every successful checkout, undo or redo invokes git checkout exactly once
//! - Failed lookups (unknown commit, empty queue) write nothing and run nothing
//! - Queue files are saved before git checkout runs and are never rolled back

pub mod navigator;

pub use navigator::{
    plan_checkout, CheckoutPlan, CheckoutReport, Direction, NavError, Navigator, QueueSnapshot,
    StepReport,
};

use std::path::PathBuf;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}
