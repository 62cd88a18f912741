//! NoteGraph Core
//!
//! Relationship graph engine for notes: turns a note collection and the links
//! between them into a filtered, positioned node/edge set ready for a
//! visualization surface.
//!
//! # Architecture
//!
//! - **Pure pipeline**: build -> filter -> layout, no I/O, no hidden state
//! - **Three layouts**: force approximation, radial-by-degree, hierarchical
//! - **Injected stores**: local-graph assembly reads through repository traits
//!
//! # Modules
//!
//! - [`models`] - Notes, links and the derived graph nodes/edges
//! - [`utils`] - Tag extraction
//! - [`graph`] - Builder, filter engine and layout engine
//! - [`config`] - Request options and layout constants
//! - [`db`] - Repository traits and the in-memory store
//! - [`services`] - Local-graph assembly around a focal note
//! - [`logging`] - Tracing subscriber setup

pub mod config;
pub mod db;
pub mod graph;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::{GraphOptions, LayoutConfig};
pub use graph::{filter_and_layout, LayoutType};
pub use models::*;
pub use services::*;
