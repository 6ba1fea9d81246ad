//! core::paths
//!
//! Centralized path routing for gitq storage locations.
//!
//! # Architecture
//!
//! All gitq storage locations are computed here. Each working tree has its
//! own HEAD, so queue state is kept per working tree while configuration is
//! shared by every worktree of a repository:
//! - Normal repositories (git_dir == common_dir)
//! - Linked worktrees (git_dir is `<common_dir>/worktrees/<name>`)
//!
//! # Storage Layout
//!
//! Configuration always lives at `<common_dir>/gitq/config.toml`.
//! Queue state lives in the state directory, `<git_dir>/gitq/` unless
//! the repo config overrides it:
//! - `forward_queue.json` - Commits available to redo
//! - `backward_queue.json` - Commits available to undo
//! - `lock` - Exclusive lock file
//!
//! # Example
//!
//! ```
//! use gitq::core::paths::GitqPaths;
//! use std::path::PathBuf;
//!
//! let paths = GitqPaths::new(
//!     PathBuf::from("/repo/.git/worktrees/wt"),
//!     PathBuf::from("/repo/.git"),
//! );
//!
//! assert_eq!(paths.state_dir(), PathBuf::from("/repo/.git/worktrees/wt/gitq"));
//! assert_eq!(
//!     paths.repo_config_path(),
//!     PathBuf::from("/repo/.git/gitq/config.toml")
//! );
//! ```

use std::path::PathBuf;

use crate::git::RepoInfo;

/// Centralized path routing for gitq storage.
///
/// # Invariants
///
/// - Configuration uses `common_dir` (shared across worktrees)
/// - Queue state uses `git_dir` (one pair of queues per working tree)
/// - No code outside this module should compute `*.join("gitq")` paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitqPaths {
    /// Path to the per-worktree .git directory.
    pub git_dir: PathBuf,

    /// Path to the shared git directory.
    pub common_dir: PathBuf,

    /// Override for the queue state directory.
    state_dir: Option<PathBuf>,
}

impl GitqPaths {
    /// Create a new GitqPaths from git_dir and common_dir.
    pub fn new(git_dir: PathBuf, common_dir: PathBuf) -> Self {
        Self {
            git_dir,
            common_dir,
            state_dir: None,
        }
    }

    /// Create GitqPaths from a RepoInfo.
    pub fn from_repo_info(info: &RepoInfo) -> Self {
        Self::new(info.git_dir.clone(), info.common_dir.clone())
    }

    /// Route queue state and the lock file to `dir` instead of the default.
    pub fn with_state_dir(mut self, dir: PathBuf) -> Self {
        self.state_dir = Some(dir);
        self
    }

    /// Get the root gitq directory under common_dir.
    pub fn repo_gitq_dir(&self) -> PathBuf {
        self.common_dir.join("gitq")
    }

    /// Get the path to the repository configuration file.
    ///
    /// This is `<common_dir>/gitq/config.toml` regardless of any state
    /// directory override.
    pub fn repo_config_path(&self) -> PathBuf {
        self.repo_gitq_dir().join("config.toml")
    }

    /// Get the default per-worktree gitq directory under git_dir.
    pub fn worktree_gitq_dir(&self) -> PathBuf {
        self.git_dir.join("gitq")
    }

    /// Get the directory holding the queue files and the lock.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(|| self.worktree_gitq_dir())
    }

    /// Get the path to the lock file.
    pub fn lock_path(&self) -> PathBuf {
        self.state_dir().join("lock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal() -> GitqPaths {
        GitqPaths::new(PathBuf::from("/repo/.git"), PathBuf::from("/repo/.git"))
    }

    #[test]
    fn default_state_dir() {
        assert_eq!(normal().state_dir(), PathBuf::from("/repo/.git/gitq"));
    }

    #[test]
    fn lock_path() {
        assert_eq!(normal().lock_path(), PathBuf::from("/repo/.git/gitq/lock"));
    }

    #[test]
    fn state_dir_override_moves_queues_and_lock() {
        let paths = normal().with_state_dir(PathBuf::from("/repo/.gitq"));
        assert_eq!(paths.state_dir(), PathBuf::from("/repo/.gitq"));
        assert_eq!(paths.lock_path(), PathBuf::from("/repo/.gitq/lock"));
        // config stays put
        assert_eq!(
            paths.repo_config_path(),
            PathBuf::from("/repo/.git/gitq/config.toml")
        );
    }

    #[test]
    fn worktree_state_is_private_config_is_shared() {
        let paths = GitqPaths::new(
            PathBuf::from("/repo/.git/worktrees/feature"),
            PathBuf::from("/repo/.git"),
        );
        assert_eq!(
            paths.state_dir(),
            PathBuf::from("/repo/.git/worktrees/feature/gitq")
        );
        assert_eq!(
            paths.lock_path(),
            PathBuf::from("/repo/.git/worktrees/feature/gitq/lock")
        );
        assert_eq!(
            paths.repo_config_path(),
            PathBuf::from("/repo/.git/gitq/config.toml")
        );
    }

    #[test]
    fn from_repo_info() {
        let info = RepoInfo {
            git_dir: PathBuf::from("/repo/.git"),
            common_dir: PathBuf::from("/repo/.git"),
            work_dir: PathBuf::from("/repo"),
        };

        let paths = GitqPaths::from_repo_info(&info);
        assert_eq!(paths.git_dir, info.git_dir);
        assert_eq!(paths.common_dir, info.common_dir);
    }
}
