//! Layout Engine
//!
//! Assigns a 2D position to every node. Three interchangeable strategies:
//!
//! - [`LayoutType::Force`] - deterministic stand-in for a force simulation:
//!   a centered grid for small graphs, one large circle past the threshold
//! - [`LayoutType::Radial`] - most connected node at the center, the rest on a
//!   ring in degree order
//! - [`LayoutType::Hierarchical`] - levels from a depth-first walk over
//!   directed edges, stacked top to bottom
//!
//! Every strategy is a pure function of its input: identical nodes and edges
//! produce identical positions, and only `position` is changed. Empty input,
//! disconnected graphs, cycles and self-loops are all handled without error.
//! Edges whose endpoints are not in the node set are ignored.

mod force;
mod hierarchical;
mod radial;

use crate::config::LayoutConfig;
use crate::models::{GraphEdge, GraphNode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    #[default]
    Force,
    Radial,
    Hierarchical,
}

impl LayoutType {
    pub const ALL: [LayoutType; 3] = [
        LayoutType::Force,
        LayoutType::Radial,
        LayoutType::Hierarchical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::Force => "force",
            LayoutType::Radial => "radial",
            LayoutType::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "force" => Ok(LayoutType::Force),
            "radial" => Ok(LayoutType::Radial),
            "hierarchical" => Ok(LayoutType::Hierarchical),
            other => Err(format!("Unknown layout type: {}", other)),
        }
    }
}

/// Position `nodes` using the requested strategy
pub fn layout(
    mut nodes: Vec<GraphNode>,
    edges: &[GraphEdge],
    layout_type: LayoutType,
    config: &LayoutConfig,
) -> Vec<GraphNode> {
    match layout_type {
        LayoutType::Force => force::apply(&mut nodes, config),
        LayoutType::Radial => radial::apply(&mut nodes, edges, config),
        LayoutType::Hierarchical => hierarchical::apply(&mut nodes, edges, config),
    }

    tracing::debug!("Applied {} layout to {} nodes", layout_type, nodes.len());
    nodes
}

/// Map from node id to its index in the node slice
fn index_of(nodes: &[GraphNode]) -> HashMap<&str, usize> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.as_str(), i))
        .collect()
}

/// Resolve edge endpoints to node indices, skipping edges with a missing end
fn resolved_edges(index: &HashMap<&str, usize>, edges: &[GraphEdge]) -> Vec<(usize, usize)> {
    edges
        .iter()
        .filter_map(|edge| {
            let source = *index.get(edge.source.as_str())?;
            let target = *index.get(edge.target.as_str())?;
            Some((source, target))
        })
        .collect()
}

/// Offset of slot `i` in a row of `count` slots centered on zero
fn centered_offset(i: usize, count: usize, spacing: f64) -> f64 {
    (i as f64 - (count as f64 - 1.0) / 2.0) * spacing
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;
