//! Business Services
//!
//! - `LocalGraphService` - gathers the neighbourhood of a focal note from the
//!   injected repositories and runs it through the graph pipeline
//!
//! This is the only layer that performs I/O; everything it delegates to in
//! [`crate::graph`] is pure.

pub mod error;
pub mod local_graph;

pub use error::GraphServiceError;
pub use local_graph::LocalGraphService;
