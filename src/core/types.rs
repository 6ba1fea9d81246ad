//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`CommitId`] - Opaque commit identifier as printed by `git log`
//! - [`QueueKind`] - Which of the two navigation queues is meant
//!
//! # Examples
//!
//! ```
//! use gitq::core::types::CommitId;
//!
//! let id = CommitId::new("abc123def4567890abc123def4567890abc12345").unwrap();
//! assert_eq!(id.short(7), "abc123d");
//!
//! assert!(CommitId::new("").is_err());
//! assert!(CommitId::new("has space").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid commit id: {0}")]
    InvalidCommitId(String),
}

/// An opaque commit identifier.
///
/// Identifiers are compared as exact strings; no case folding or
/// abbreviation matching takes place. Their only ordering is their
/// position in a history snapshot.
///
/// Construction rejects values that could never appear as a line of
/// `git log --pretty=format:%H` output or that git would read as an option:
/// - Cannot be empty
/// - Cannot contain whitespace or control characters
/// - Cannot start with `-`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitId(String);

impl CommitId {
    /// Create a new validated commit identifier.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidCommitId` if the value is empty or malformed.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    fn validate(id: &str) -> Result<(), TypeError> {
        if id.is_empty() {
            return Err(TypeError::InvalidCommitId(
                "commit id cannot be empty".into(),
            ));
        }
        if id.starts_with('-') {
            return Err(TypeError::InvalidCommitId(format!(
                "commit id cannot start with '-': {id}"
            )));
        }
        if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TypeError::InvalidCommitId(format!(
                "commit id cannot contain whitespace: {id:?}"
            )));
        }
        Ok(())
    }

    /// Get an abbreviated form of the identifier.
    ///
    /// Returns the first `len` characters, or the whole identifier if it is
    /// shorter.
    pub fn short(&self, len: usize) -> &str {
        match self.0.char_indices().nth(len) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommitId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CommitId> for String {
    fn from(id: CommitId) -> Self {
        id.0
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CommitId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two persisted navigation queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// Commits available to `redo`.
    Forward,
    /// Commits available to `undo`.
    Backward,
}

impl QueueKind {
    /// File name of this queue inside the state directory.
    pub fn file_name(self) -> &'static str {
        match self {
            QueueKind::Forward => "forward_queue.json",
            QueueKind::Backward => "backward_queue.json",
        }
    }

    /// The queue that receives commits popped from this one.
    pub fn opposite(self) -> Self {
        match self {
            QueueKind::Forward => QueueKind::Backward,
            QueueKind::Backward => QueueKind::Forward,
        }
    }
}

impl std::fmt::Display for QueueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueKind::Forward => write!(f, "forward"),
            QueueKind::Backward => write!(f, "backward"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod commit_id {
        use super::*;

        #[test]
        fn valid_ids() {
            assert!(CommitId::new("abc123def4567890abc123def4567890abc12345").is_ok());
            assert!(CommitId::new("C5").is_ok());
            assert!(CommitId::new("deadbeef").is_ok());
        }

        #[test]
        fn empty_rejected() {
            assert_eq!(
                CommitId::new(""),
                Err(TypeError::InvalidCommitId("commit id cannot be empty".into()))
            );
        }

        #[test]
        fn whitespace_rejected() {
            assert!(CommitId::new("abc def").is_err());
            assert!(CommitId::new("abc\n").is_err());
            assert!(CommitId::new("\tabc").is_err());
        }

        #[test]
        fn leading_dash_rejected() {
            assert!(CommitId::new("--force").is_err());
        }

        #[test]
        fn case_is_preserved() {
            let id = CommitId::new("ABCdef").unwrap();
            assert_eq!(id.as_str(), "ABCdef");
            assert_ne!(id, CommitId::new("abcdef").unwrap());
        }

        #[test]
        fn short_truncates() {
            let id = CommitId::new("abc123def456").unwrap();
            assert_eq!(id.short(7), "abc123d");
            assert_eq!(id.short(100), "abc123def456");
            assert_eq!(id.short(0), "");
        }

        #[test]
        fn serde_as_plain_string() {
            let id = CommitId::new("abc123").unwrap();
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, "\"abc123\"");
        }

        #[test]
        fn serde_rejects_invalid() {
            let result: Result<CommitId, _> = serde_json::from_str("\"\"");
            assert!(result.is_err());
        }

        #[test]
        fn from_str_parses() {
            let id: CommitId = "abc123".parse().unwrap();
            assert_eq!(id.to_string(), "abc123");
        }
    }

    mod queue_kind {
        use super::*;

        #[test]
        fn file_names() {
            assert_eq!(QueueKind::Forward.file_name(), "forward_queue.json");
            assert_eq!(QueueKind::Backward.file_name(), "backward_queue.json");
        }

        #[test]
        fn opposite_swaps() {
            assert_eq!(QueueKind::Forward.opposite(), QueueKind::Backward);
            assert_eq!(QueueKind::Backward.opposite(), QueueKind::Forward);
        }
    }
}
