//! Store Error Types
//!
//! This module defines error types for note and link repository operations,
//! covering backend outages, failed queries and malformed snapshots.

use thiserror::Error;

/// Repository operation errors
///
/// Raised by `NoteRepository` / `LinkRepository` implementations. A missing
/// note is not an error at this layer; lookups return `Ok(None)` and the
/// service layer decides what absence means.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend could not be reached
    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },

    /// Query was sent but failed
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// Snapshot data could not be decoded
    #[error("Store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot decoded but has the wrong structure
    #[error("Invalid store snapshot: {0}")]
    InvalidSnapshot(String),
}

impl StoreError {
    /// Create an unavailable error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Create a query failed error
    pub fn query_failed(msg: impl Into<String>) -> Self {
        Self::QueryFailed(msg.into())
    }

    /// Create an invalid snapshot error
    pub fn invalid_snapshot(msg: impl Into<String>) -> Self {
        Self::InvalidSnapshot(msg.into())
    }
}
