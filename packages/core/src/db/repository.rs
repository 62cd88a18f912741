//! Repository Traits - Note and Link Store Abstraction
//!
//! The graph core never talks to a backend client directly. Local-graph
//! assembly depends on these two traits, injected as `Arc<dyn ...>`, so the
//! filter and layout code stays pure and tests can swap in the
//! [`InMemoryStore`](super::InMemoryStore) or a failing double.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync`: the assembler runs independent
//! queries concurrently and the futures may move between threads.

use super::StoreError;
use crate::models::{Link, Note};
use async_trait::async_trait;

/// Read access to notes
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Get a note by id
    ///
    /// Returns `Ok(None)` when no note has this id.
    async fn get_note(&self, id: &str) -> Result<Option<Note>, StoreError>;

    /// Get every note whose id is in `ids`
    ///
    /// Unknown ids are ignored. Result order is the store's order.
    async fn get_notes_by_ids(&self, ids: &[String]) -> Result<Vec<Note>, StoreError>;
}

/// Read access to links
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Links where `note_id` is the source or the target
    async fn links_for_note(&self, note_id: &str) -> Result<Vec<Link>, StoreError>;

    /// Links where either endpoint is in `note_ids`
    ///
    /// This is a superset of the links among `note_ids`: the other endpoint
    /// may lie outside the set.
    async fn links_touching(&self, note_ids: &[String]) -> Result<Vec<Link>, StoreError>;
}
