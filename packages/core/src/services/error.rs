//! Service Layer Error Types
//!
//! This module defines error types for graph service operations.

use crate::db::StoreError;
use thiserror::Error;

/// Graph service errors
#[derive(Error, Debug)]
pub enum GraphServiceError {
    /// Focal note not found by ID
    #[error("Note not found: {id}")]
    NoteNotFound { id: String },

    /// Store query failed
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    /// Layout configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GraphServiceError {
    /// Create a note not found error
    pub fn note_not_found(id: impl Into<String>) -> Self {
        Self::NoteNotFound { id: id.into() }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether this error came from the backing store
    pub fn is_store_error(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
