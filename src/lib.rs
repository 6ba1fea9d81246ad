//! gitq - Undo and redo for git checkouts
//!
//! gitq checks out a commit from the current history and remembers the
//! commits it passed over, so that `undo` and `redo` can step back through
//! them one at a time. The remembered commits live in two queues persisted
//! as JSON files in the repository's git directory.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - The [`Navigator`](engine::Navigator) queue state machine
//! - [`core`] - Domain types, queue storage, locking and configuration
//! - [`git`] - Single interface for all Git operations
//!
//! # Invariants
//!
//! 1. A checkout adds commits to exactly one queue
//! 2. Undo and redo move exactly one commit between the queues
//! 3. Queue files are replaced atomically, never appended to
//! 4. Mutating commands hold an exclusive per-repository lock

pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
