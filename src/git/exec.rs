//! git::exec
//!
//! Running the `git` binary.
//!
//! [`Executor`] is the seam between navigation logic and the outside world:
//! it takes a git argument list and returns trimmed stdout, or fails on a
//! non-zero exit. [`GitCli`] is the real implementation;
//! [`MockGit`](super::mock::MockGit) stands in for it in tests.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

use crate::core::types::CommitId;

/// Errors from running git commands.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The git binary could not be started.
    #[error("failed to run git {args}: {source}")]
    Spawn {
        /// Space-joined arguments
        args: String,
        source: std::io::Error,
    },

    /// git ran and exited unsuccessfully.
    #[error("git {args} failed ({status}): {stderr}")]
    Failed {
        /// Space-joined arguments
        args: String,
        /// Exit status description
        status: String,
        /// Trimmed standard error
        stderr: String,
    },

    /// git produced output that could not be interpreted.
    #[error("unexpected output from git {args}: {message}")]
    BadOutput { args: String, message: String },
}

/// Runs git commands.
pub trait Executor {
    /// Run `git <args>` and return trimmed standard output.
    fn run(&self, args: &[&str]) -> Result<String, ExecError>;

    /// Check out `commit`, detaching HEAD.
    fn checkout(&self, commit: &CommitId) -> Result<(), ExecError> {
        self.run(&["checkout", commit.as_str()]).map(|_| ())
    }
}

impl<E: Executor + ?Sized> Executor for &E {
    fn run(&self, args: &[&str]) -> Result<String, ExecError> {
        (**self).run(args)
    }

    fn checkout(&self, commit: &CommitId) -> Result<(), ExecError> {
        (**self).checkout(commit)
    }
}

/// Executor backed by the `git` binary on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    /// Create an executor that runs git inside `work_dir`.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }
}

impl Executor for GitCli {
    fn run(&self, args: &[&str]) -> Result<String, ExecError> {
        let joined = args.join(" ");
        tracing::debug!(args = %joined, cwd = %self.work_dir.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|e| ExecError::Spawn {
                args: joined.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(args = %joined, status = %output.status, "git failed");
            return Err(ExecError::Failed {
                args: joined,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
