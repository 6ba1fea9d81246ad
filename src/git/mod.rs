//! git
//!
//! Every interaction with git.
//!
//! # Architecture
//!
//! - [`interface`] opens the repository with `git2` and answers layout
//!   questions (git dir, common dir, work dir, HEAD)
//! - [`exec`] runs the `git` binary behind the [`Executor`] trait
//! - [`history`] turns `git log` output into history snapshots behind the
//!   [`HistoryProvider`] trait
//! - [`mock`] provides an in-memory [`Executor`] for tests
//!
//! No other module imports `git2` or spawns `git` directly.

pub mod exec;
pub mod history;
mod interface;
pub mod mock;

pub use exec::{ExecError, Executor, GitCli};
pub use history::{HistoryProvider, LogHistory};
pub use interface::{Git, GitError, HeadState, RepoInfo};
