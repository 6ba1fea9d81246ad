//! core::queue
//!
//! The two persisted navigation queues and their on-disk store.
//!
//! # Storage
//!
//! Each queue is a JSON array of commit id strings, most recently pushed
//! last:
//!
//! ```text
//! ["c0ffee...", "deadbe..."]
//! ```
//!
//! Files are rewritten in full on every save (write to a temp file in the
//! same directory, then rename). A missing file loads as an empty queue.
//! A file that exists but does not parse is a hard error; the store never
//! guesses at corrupt state.
//!
//! The two files are saved independently. Callers that need both saves to
//! happen without interference hold a [`RepoLock`](crate::core::lock::RepoLock).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::paths::GitqPaths;
use crate::core::types::{CommitId, QueueKind};

/// Errors from queue storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read queue file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse queue file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write queue file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize queue: {0}")]
    SerializeError(String),
}

/// A stack of commit ids: pushed at the tail, popped from the tail.
///
/// No deduplication or size cap is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitQueue(Vec<CommitId>);

impl CommitQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit at the tail.
    pub fn push(&mut self, commit: CommitId) {
        self.0.push(commit);
    }

    /// Remove and return the commit at the tail.
    pub fn pop(&mut self) -> Option<CommitId> {
        self.0.pop()
    }

    /// The commit that the next `pop` would return.
    pub fn peek(&self) -> Option<&CommitId> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommitId> {
        self.0.iter()
    }
}

impl From<Vec<CommitId>> for CommitQueue {
    fn from(commits: Vec<CommitId>) -> Self {
        Self(commits)
    }
}

impl FromIterator<CommitId> for CommitQueue {
    fn from_iter<I: IntoIterator<Item = CommitId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<CommitId> for CommitQueue {
    fn extend<I: IntoIterator<Item = CommitId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl std::fmt::Display for CommitQueue {
    /// Formats as `[a, b, c]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, commit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", commit)?;
        }
        write!(f, "]")
    }
}

/// File-backed store for the forward and backward queues.
///
/// The store owns no cached state: every `load` reads the file and every
/// `save` rewrites it.
#[derive(Debug, Clone)]
pub struct QueueStore {
    dir: PathBuf,
}

impl QueueStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store at the state directory routed by `paths`.
    pub fn from_paths(paths: &GitqPaths) -> Self {
        Self::new(paths.state_dir())
    }

    /// Directory holding the queue files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `kind`.
    pub fn path(&self, kind: QueueKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Load a queue. A missing file is an empty queue.
    pub fn load(&self, kind: QueueKind) -> Result<CommitQueue, StoreError> {
        let path = self.path(kind);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(CommitQueue::new());
            }
            Err(e) => return Err(StoreError::ReadError { path, source: e }),
        };

        serde_json::from_str(&contents).map_err(|e| StoreError::ParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Overwrite a queue file with `queue`.
    pub fn save(&self, kind: QueueKind, queue: &CommitQueue) -> Result<(), StoreError> {
        let path = self.path(kind);
        let contents =
            serde_json::to_string(queue).map_err(|e| StoreError::SerializeError(e.to_string()))?;
        write_atomic(&path, contents.as_bytes())?;
        tracing::debug!(queue = %kind, len = queue.len(), path = %path.display(), "saved queue");
        Ok(())
    }

    /// Overwrite both queues with empty sequences.
    pub fn clear(&self) -> Result<(), StoreError> {
        let empty = CommitQueue::new();
        self.save(QueueKind::Forward, &empty)?;
        self.save(QueueKind::Backward, &empty)
    }
}

/// Write `contents` to `path` through a sibling temp file and a rename.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path).map_err(|e| StoreError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(contents)
        .and_then(|()| file.sync_all())
        .map_err(|e| StoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

    fs::rename(&temp_path, path).map_err(|e| StoreError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
