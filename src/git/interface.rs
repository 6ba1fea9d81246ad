//! git::interface
//!
//! Repository discovery and layout queries using git2.
//!
//! gitq reads repository structure (where `.git` lives, whether this is a
//! linked worktree, what HEAD points at) through `git2`. Checkouts and
//! history listing go through the `git` binary instead, via
//! [`Executor`](super::Executor), so that working-tree safety checks are the
//! ones users already know from `git checkout`.
//!
//! # Example
//!
//! ```ignore
//! use gitq::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let info = git.info()?;
//! println!("queues live under {}", info.git_dir.display());
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::CommitId;

/// Errors from repository queries.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// Information about a Git repository.
#[derive(Debug, Clone)]
pub struct RepoInfo {
    /// Path to the per-worktree .git directory
    pub git_dir: PathBuf,
    /// Path to the shared .git directory (differs from git_dir in worktrees)
    pub common_dir: PathBuf,
    /// Path to the working directory
    pub work_dir: PathBuf,
}

/// What HEAD currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadState {
    /// No commits yet.
    Unborn,
    /// On a branch.
    Branch { name: String, commit: CommitId },
    /// Detached at a commit.
    Detached { commit: CommitId },
}

impl std::fmt::Display for HeadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadState::Unborn => write!(f, "no commits yet"),
            HeadState::Branch { name, commit } => write!(f, "{} ({})", name, commit.short(7)),
            HeadState::Detached { commit } => write!(f, "detached at {}", commit.short(7)),
        }
    }
}

/// Read-only handle on a git repository.
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover`, so `path` can be any directory
    /// within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Get repository layout information.
    pub fn info(&self) -> Result<RepoInfo, GitError> {
        let git_dir = self.repo.path().to_path_buf();
        let common_dir = self.repo.commondir().to_path_buf();
        let work_dir = self.repo.workdir().ok_or(GitError::BareRepo)?.to_path_buf();

        Ok(RepoInfo {
            git_dir,
            common_dir,
            work_dir,
        })
    }

    /// Describe what HEAD points at.
    pub fn head(&self) -> Result<HeadState, GitError> {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(HeadState::Unborn),
            Err(e) => return Err(e.into()),
        };

        let oid = head.peel_to_commit()?.id();
        let commit = CommitId::new(oid.to_string()).map_err(|e| GitError::Internal {
            message: e.to_string(),
        })?;

        if self.repo.head_detached()? {
            return Ok(HeadState::Detached { commit });
        }

        match head.shorthand() {
            Some(name) => Ok(HeadState::Branch {
                name: name.to_string(),
                commit,
            }),
            None => Ok(HeadState::Detached { commit }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_outside_repo_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        // A fresh temp dir is not inside any repository unless TMPDIR is.
        if git2::Repository::discover(temp.path()).is_err() {
            assert!(matches!(
                Git::open(temp.path()),
                Err(GitError::NotARepo { .. })
            ));
        }
    }

    #[test]
    fn unborn_head() {
        let temp = tempfile::TempDir::new().unwrap();
        git2::Repository::init(temp.path()).unwrap();

        let git = Git::open(temp.path()).unwrap();
        assert_eq!(git.head().unwrap(), HeadState::Unborn);
    }

    #[test]
    fn info_for_normal_repo() {
        let temp = tempfile::TempDir::new().unwrap();
        git2::Repository::init(temp.path()).unwrap();

        let info = Git::open(temp.path()).unwrap().info().unwrap();
        assert_eq!(info.git_dir, info.common_dir);
        assert!(info.git_dir.ends_with(".git"));
    }

    #[test]
    fn head_state_display() {
        let commit = CommitId::new("abc123def4567890").unwrap();
        assert_eq!(
            HeadState::Detached {
                commit: commit.clone()
            }
            .to_string(),
            "detached at abc123d"
        );
        assert_eq!(
            HeadState::Branch {
                name: "main".into(),
                commit
            }
            .to_string(),
            "main (abc123d)"
        );
        assert_eq!(HeadState::Unborn.to_string(), "no commits yet");
    }

    #[test]
    fn error_display_formatting() {
        let err = GitError::NotARepo {
            path: PathBuf::from("/tmp/x"),
        };
        assert!(err.to_string().contains("/tmp/x"));
        assert!(GitError::BareRepo.to_string().contains("bare"));
    }
}
