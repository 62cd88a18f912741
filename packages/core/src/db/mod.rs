//! Store Layer
//!
//! Repository traits through which local-graph assembly reads notes and
//! links, plus an in-memory implementation.
//!
//! # Architecture
//!
//! The real backend lives in the surrounding application. It is expected to
//! answer id lookups, "either endpoint equals" filters and "in-list" filters;
//! [`NoteRepository`] and [`LinkRepository`] capture exactly those queries.

mod error;
mod memory_store;
mod repository;

pub use error::StoreError;
pub use memory_store::InMemoryStore;
pub use repository::{LinkRepository, NoteRepository};
