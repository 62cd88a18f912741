//! Data Models
//!
//! - `Note` / `Link` - external entities consumed by the graph, parsed leniently
//! - `GraphNode` / `GraphEdge` - derived render model produced per layout pass

mod graph;
mod note;

pub use graph::{
    edge_id, EdgeStyle, GraphData, GraphEdge, GraphNode, GraphNodeData, Position, NOTE_NODE_TYPE,
};
pub use note::{parse_links, parse_notes, Link, Note, NoteContent};
