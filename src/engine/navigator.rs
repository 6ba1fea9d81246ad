//! engine::navigator
//!
//! The undo/redo state machine.
//!
//! # Queues
//!
//! Two persisted stacks drive navigation:
//! - **backward**: commits `undo` can move to
//! - **forward**: commits `redo` can move to
//!
//! # Checkout direction
//!
//! `checkout(target)` takes a fresh newest-first snapshot `H` of length `N`,
//! finds the target's index `i` and compares it with `mid = N / 2`:
//!
//! | condition  | commits skipped                 | appended to |
//! |------------|---------------------------------|-------------|
//! | `i > mid`  | `H[0], H[1], …, H[i-1]`         | backward    |
//! | `i <= mid` | `H[N-1], H[N-2], …, H[i+1]`     | forward     |
//!
//! That is, a target in the older half is reached by walking in from the
//! tip, and any other target (the exact midpoint included) by walking in
//! from the root.
//!
//! # Ordering
//!
//! Queue files are saved before git is asked to check out. A failed checkout
//! leaves the saved queues in place; nothing is rolled back.

use thiserror::Error;

use crate::core::queue::{CommitQueue, QueueStore, StoreError};
use crate::core::types::{CommitId, QueueKind};
use crate::git::{ExecError, Executor, HistoryProvider};

/// Errors from navigation operations.
#[derive(Debug, Error)]
pub enum NavError {
    /// The target is not in the current history snapshot, or is not a
    /// well-formed commit id at all.
    #[error("commit {commit} not found in history")]
    CommitNotFound { commit: String },

    /// Undo or redo found its source queue empty.
    #[error("{}", empty_queue_message(.queue))]
    NoHistory {
        /// The queue that was empty
        queue: QueueKind,
    },

    /// git refused the checkout. Queue changes already saved are kept.
    #[error("checkout of {commit} failed")]
    CheckoutExecution {
        commit: CommitId,
        #[source]
        source: ExecError,
    },

    /// Queue files could not be read or written.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The history listing failed.
    #[error("failed to list history")]
    History(#[source] ExecError),
}

fn empty_queue_message(queue: &QueueKind) -> &'static str {
    match queue {
        QueueKind::Backward => "No previous commits to undo.",
        QueueKind::Forward => "No forward commits to redo.",
    }
}

/// Which end of the snapshot a checkout walked in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Removed from the newest end; skipped commits go to the backward queue.
    FromTip,
    /// Removed from the oldest end; skipped commits go to the forward queue.
    FromRoot,
}

impl Direction {
    /// The queue that receives skipped commits.
    pub fn queue(self) -> QueueKind {
        match self {
            Direction::FromTip => QueueKind::Backward,
            Direction::FromRoot => QueueKind::Forward,
        }
    }
}

/// The queue changes a checkout will make, computed from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPlan {
    pub direction: Direction,
    /// Commits to append, in append order.
    pub skipped: Vec<CommitId>,
}

/// Decide how to reach `target` within `history` (newest first).
///
/// # Errors
///
/// [`NavError::CommitNotFound`] if `target` is not in `history`.
pub fn plan_checkout(history: &[CommitId], target: &CommitId) -> Result<CheckoutPlan, NavError> {
    let index = history
        .iter()
        .position(|c| c == target)
        .ok_or_else(|| NavError::CommitNotFound {
            commit: target.to_string(),
        })?;
    let mid = history.len() / 2;

    let plan = if index > mid {
        CheckoutPlan {
            direction: Direction::FromTip,
            skipped: history[..index].to_vec(),
        }
    } else {
        CheckoutPlan {
            direction: Direction::FromRoot,
            skipped: history[index + 1..].iter().rev().cloned().collect(),
        }
    };

    tracing::debug!(
        len = history.len(),
        index,
        mid,
        direction = ?plan.direction,
        skipped = plan.skipped.len(),
        "planned checkout"
    );
    Ok(plan)
}

/// Contents of both queues after an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueSnapshot {
    pub forward: CommitQueue,
    pub backward: CommitQueue,
}

impl QueueSnapshot {
    fn from_pair(a_kind: QueueKind, a: CommitQueue, b: CommitQueue) -> Self {
        match a_kind {
            QueueKind::Forward => Self {
                forward: a,
                backward: b,
            },
            QueueKind::Backward => Self {
                forward: b,
                backward: a,
            },
        }
    }

    fn get_mut(&mut self, kind: QueueKind) -> &mut CommitQueue {
        match kind {
            QueueKind::Forward => &mut self.forward,
            QueueKind::Backward => &mut self.backward,
        }
    }
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReport {
    pub target: CommitId,
    pub plan: CheckoutPlan,
    pub queues: QueueSnapshot,
}

/// Result of a successful undo or redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// The commit moved between queues and checked out.
    pub commit: CommitId,
    pub queues: QueueSnapshot,
}

/// Undo/redo navigator over a queue store, a history source and git.
#[derive(Debug)]
pub struct Navigator<H, E> {
    store: QueueStore,
    history: H,
    exec: E,
}

impl<H: HistoryProvider, E: Executor> Navigator<H, E> {
    pub fn new(store: QueueStore, history: H, exec: E) -> Self {
        Self {
            store,
            history,
            exec,
        }
    }

    /// The backing queue store.
    pub fn store(&self) -> &QueueStore {
        &self.store
    }

    /// Check out `target`, recording the commits passed over.
    ///
    /// Exactly one queue gains commits; both are saved. Nothing is written
    /// and git is not invoked when `target` is not in history.
    pub fn checkout(&self, target: &CommitId) -> Result<CheckoutReport, NavError> {
        let history = self.history.list_commits().map_err(NavError::History)?;
        let plan = plan_checkout(&history, target)?;

        let mut queues = self.status()?;
        queues
            .get_mut(plan.direction.queue())
            .extend(plan.skipped.iter().cloned());
        tracing::debug!(
            history = history.len(),
            direction = ?plan.direction,
            skipped = plan.skipped.len(),
            "planned checkout"
        );

        self.store.save(QueueKind::Forward, &queues.forward)?;
        self.store.save(QueueKind::Backward, &queues.backward)?;

        self.exec
            .checkout(target)
            .map_err(|source| NavError::CheckoutExecution {
                commit: target.clone(),
                source,
            })?;
        tracing::info!(commit = %target, "checked out");

        Ok(CheckoutReport {
            target: target.clone(),
            plan,
            queues,
        })
    }

    /// Move to the most recent commit in the backward queue.
    pub fn undo(&self) -> Result<StepReport, NavError> {
        self.step(QueueKind::Backward)
    }

    /// Move to the most recent commit in the forward queue.
    pub fn redo(&self) -> Result<StepReport, NavError> {
        self.step(QueueKind::Forward)
    }

    /// Pop from `from`, push onto the opposite queue, check the commit out.
    fn step(&self, from: QueueKind) -> Result<StepReport, NavError> {
        let mut source = self.store.load(from)?;
        let commit = source.pop().ok_or(NavError::NoHistory { queue: from })?;
        self.store.save(from, &source)?;

        let to = from.opposite();
        let mut dest = self.store.load(to)?;
        dest.push(commit.clone());
        self.store.save(to, &dest)?;

        self.exec
            .checkout(&commit)
            .map_err(|source| NavError::CheckoutExecution {
                commit: commit.clone(),
                source,
            })?;
        tracing::info!(commit = %commit, from = %from, "stepped");

        Ok(StepReport {
            commit,
            queues: QueueSnapshot::from_pair(from, source, dest),
        })
    }

    /// Empty both queues. Does not touch the working tree.
    pub fn reset(&self) -> Result<(), NavError> {
        self.store.clear()?;
        tracing::info!("queues reset");
        Ok(())
    }

    /// Current queue contents. Never writes.
    pub fn status(&self) -> Result<QueueSnapshot, NavError> {
        Ok(QueueSnapshot {
            forward: self.store.load(QueueKind::Forward)?,
            backward: self.store.load(QueueKind::Backward)?,
        })
    }
}
