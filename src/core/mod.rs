//! core
//!
//! Core domain types, storage and configuration for gitq.
//!
//! # Modules
//!
//! - [`types`] - Strong types: CommitId, QueueKind
//! - [`queue`] - The forward/backward queues and their file store
//! - [`lock`] - Exclusive lock around mutating operations
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for gitq storage

pub mod config;
pub mod lock;
pub mod paths;
pub mod queue;
pub mod types;
