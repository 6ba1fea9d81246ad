//! git::mock
//!
//! In-memory git stand-in for deterministic testing.
//!
//! `MockGit` models a single linear history and a movable HEAD. It answers
//! the two commands navigation needs:
//! - `log --pretty=format:%H` lists commits from HEAD down to the root
//! - `checkout <id>` moves HEAD to any commit in the history
//!
//! Every call is recorded for later inspection, and checkouts can be made
//! to fail to exercise error paths.
//!
//! # Example
//!
//! ```
//! use gitq::core::types::CommitId;
//! use gitq::git::mock::MockGit;
//! use gitq::git::Executor;
//!
//! let git = MockGit::with_history(&["C2", "C1", "C0"]);
//! git.checkout(&CommitId::new("C1").unwrap()).unwrap();
//!
//! assert_eq!(git.head().unwrap().as_str(), "C1");
//! assert_eq!(git.run(&["log", "--pretty=format:%H"]).unwrap(), "C1\nC0");
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::types::CommitId;

use super::exec::{ExecError, Executor};
use super::history::LOG_ARGS;

/// Mock git for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockGit {
    inner: Arc<Mutex<MockGitInner>>,
}

#[derive(Debug, Default)]
struct MockGitInner {
    /// Full history, newest first.
    commits: Vec<CommitId>,
    /// Index of HEAD in `commits`.
    head: usize,
    /// Reject every checkout with this message.
    fail_checkout: Option<String>,
    /// Recorded argument lists.
    calls: Vec<Vec<String>>,
}

impl MockGit {
    /// Create a mock with an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose history is `commits` (newest first) with HEAD at
    /// the newest commit.
    ///
    /// # Panics
    ///
    /// Panics if any name is not a valid commit id.
    pub fn with_history(commits: &[&str]) -> Self {
        let commits = commits
            .iter()
            .map(|c| CommitId::new(*c).expect("valid commit id"))
            .collect();
        let mock = Self::new();
        mock.lock().commits = commits;
        mock
    }

    /// Make every subsequent checkout fail with `message`.
    pub fn fail_checkouts(&self, message: impl Into<String>) {
        self.lock().fail_checkout = Some(message.into());
    }

    /// The commit HEAD points at, if the history is non-empty.
    pub fn head(&self) -> Option<CommitId> {
        let inner = self.lock();
        inner.commits.get(inner.head).cloned()
    }

    /// Every argument list run so far.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.lock().calls.clone()
    }

    /// Targets of every checkout attempted so far, successful or not.
    pub fn checkouts(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.first().map(String::as_str) == Some("checkout"))
            .filter_map(|c| c.get(1).cloned())
            .collect()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, MockGitInner> {
        // A poisoned mutex only happens after a panicking test thread.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Executor for MockGit {
    fn run(&self, args: &[&str]) -> Result<String, ExecError> {
        let mut inner = self.lock();
        inner.calls.push(args.iter().map(|a| a.to_string()).collect());
        let joined = args.join(" ");

        match args {
            a if a == LOG_ARGS.as_slice() => {
                if inner.commits.is_empty() {
                    return Err(ExecError::Failed {
                        args: joined,
                        status: "exit status: 128".into(),
                        stderr: "fatal: your current branch does not have any commits yet"
                            .into(),
                    });
                }
                let lines: Vec<&str> = inner.commits[inner.head..]
                    .iter()
                    .map(CommitId::as_str)
                    .collect();
                Ok(lines.join("\n"))
            }
            ["checkout", target] => {
                if let Some(message) = &inner.fail_checkout {
                    return Err(ExecError::Failed {
                        args: joined,
                        status: "exit status: 1".into(),
                        stderr: message.clone(),
                    });
                }
                match inner.commits.iter().position(|c| c.as_str() == *target) {
                    Some(idx) => {
                        inner.head = idx;
                        Ok(String::new())
                    }
                    None => Err(ExecError::Failed {
                        args: joined,
                        status: "exit status: 1".into(),
                        stderr: format!(
                            "error: pathspec '{}' did not match any file(s) known to git",
                            target
                        ),
                    }),
                }
            }
            _ => Err(ExecError::Failed {
                args: joined,
                status: "exit status: 1".into(),
                stderr: "unsupported by MockGit".into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> CommitId {
        CommitId::new(s).unwrap()
    }

    #[test]
    fn log_lists_from_head() {
        let git = MockGit::with_history(&["C2", "C1", "C0"]);
        assert_eq!(git.run(&LOG_ARGS).unwrap(), "C2\nC1\nC0");

        git.checkout(&id("C1")).unwrap();
        assert_eq!(git.run(&LOG_ARGS).unwrap(), "C1\nC0");
    }

    #[test]
    fn checkout_can_move_to_newer_commits() {
        let git = MockGit::with_history(&["C2", "C1", "C0"]);
        git.checkout(&id("C0")).unwrap();
        git.checkout(&id("C2")).unwrap();
        assert_eq!(git.head(), Some(id("C2")));
    }

    #[test]
    fn checkout_unknown_fails() {
        let git = MockGit::with_history(&["C0"]);
        assert!(git.checkout(&id("nope")).is_err());
        assert_eq!(git.head(), Some(id("C0")));
    }

    #[test]
    fn forced_checkout_failure() {
        let git = MockGit::with_history(&["C1", "C0"]);
        git.fail_checkouts("error: Your local changes would be overwritten");

        let err = git.checkout(&id("C0")).unwrap_err();
        assert!(err.to_string().contains("local changes"));
        assert_eq!(git.head(), Some(id("C1")));
    }

    #[test]
    fn empty_repo_log_fails() {
        let git = MockGit::new();
        assert!(git.run(&LOG_ARGS).is_err());
        assert!(git.head().is_none());
    }

    #[test]
    fn records_calls() {
        let git = MockGit::with_history(&["C1", "C0"]);
        git.run(&LOG_ARGS).unwrap();
        git.checkout(&id("C0")).unwrap();

        assert_eq!(git.calls().len(), 2);
        assert_eq!(git.checkouts(), vec!["C0".to_string()]);

        git.clear_calls();
        assert!(git.calls().is_empty());
    }
}
