//! Graph Node and Edge Structures
//!
//! Derived render model produced by the graph pipeline. These values are
//! rebuilt on every layout pass and never persisted.
//!
//! All structs serialize with `#[serde(rename_all = "camelCase")]` so the
//! output can be handed straight to a JavaScript visualization surface.

use super::note::Note;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Render-dispatch kind for every node produced from a note
pub const NOTE_NODE_TYPE: &str = "note";

/// 2D coordinate assigned by the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Display payload attached to each node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNodeData {
    pub title: String,
    pub tags: Vec<String>,

    /// Source note the node was built from
    pub note: Note,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Same as the source note id
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: String,

    pub position: Position,

    pub data: GraphNodeData,
}

impl GraphNode {
    /// Build a node for a note, positioned at the origin until laid out
    pub fn from_note(note: Note) -> Self {
        let tags = note.effective_tags();
        Self {
            id: note.id.clone(),
            node_type: NOTE_NODE_TYPE.to_string(),
            position: Position::ORIGIN,
            data: GraphNodeData {
                title: note.title.clone(),
                tags,
                note,
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }

    pub fn tags(&self) -> &[String] {
        &self.data.tags
    }

    /// Text of the underlying note content, used for search
    pub fn content_text(&self) -> Option<&str> {
        self.data.note.content.text()
    }
}

/// Rendering hint for an edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub animated: bool,
    pub stroke_width: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            animated: false,
            stroke_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub style: EdgeStyle,
}

impl GraphEdge {
    /// Create an edge whose id is derived from its endpoints
    ///
    /// Regenerating the graph from the same links always yields the same ids.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: edge_id(&source, &target),
            source,
            target,
            style: EdgeStyle::default(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// Deterministic edge id for a source/target pair
pub fn edge_id(source: &str, target: &str) -> String {
    format!("e{source}-{target}")
}

/// Positioned node set plus the edges between them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphData {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node_ids(&self) -> HashSet<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
