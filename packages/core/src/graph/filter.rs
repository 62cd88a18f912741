//! Filter Engine
//!
//! Narrows a built graph down to what the user asked to see:
//!
//! - **Search**: case-insensitive substring match on the node title or the
//!   note's content text (either one is enough)
//! - **Tags**: the node's tag set must intersect the selected tags
//! - **Isolated nodes**: optionally drop nodes left without any edge
//!
//! Active predicates are combined with AND. Whatever survives, edges are
//! re-pruned so no edge ever points at a filtered-out node.

use crate::models::{GraphData, GraphEdge, GraphNode};
use std::collections::HashSet;

/// Apply search and tag predicates to a node/edge set
///
/// With no active search (blank or `None`) and no selected tags the input is
/// returned untouched.
pub fn filter_graph(
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    search_query: Option<&str>,
    selected_tags: &[String],
) -> GraphData {
    let needle = search_query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    if needle.is_none() && selected_tags.is_empty() {
        return GraphData::new(nodes, edges);
    }

    let before = nodes.len();
    let nodes: Vec<GraphNode> = nodes
        .into_iter()
        .filter(|node| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_search(node, needle))
                && (selected_tags.is_empty() || matches_tags(node, selected_tags))
        })
        .collect();

    let edges = prune_edges(&nodes, edges);

    tracing::debug!(
        "Filtered graph: {} of {} nodes kept, {} edges",
        nodes.len(),
        before,
        edges.len()
    );

    GraphData::new(nodes, edges)
}

/// `needle` must already be lowercase
fn matches_search(node: &GraphNode, needle: &str) -> bool {
    node.title().to_lowercase().contains(needle)
        || node
            .content_text()
            .is_some_and(|text| text.to_lowercase().contains(needle))
}

fn matches_tags(node: &GraphNode, selected_tags: &[String]) -> bool {
    node.tags().iter().any(|tag| selected_tags.contains(tag))
}

/// Keep only edges whose source and target are both in `nodes`
pub fn prune_edges(nodes: &[GraphNode], edges: Vec<GraphEdge>) -> Vec<GraphEdge> {
    let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    edges
        .into_iter()
        .filter(|edge| ids.contains(edge.source.as_str()) && ids.contains(edge.target.as_str()))
        .collect()
}

/// Drop nodes that have no incident edge
///
/// A self-loop counts as incident. `keep` names a node that stays regardless,
/// used for the focal note of a local graph.
pub fn remove_isolated_nodes(graph: GraphData, keep: Option<&str>) -> GraphData {
    let GraphData { nodes, edges } = graph;

    let connected: HashSet<&str> = edges
        .iter()
        .flat_map(|edge| [edge.source.as_str(), edge.target.as_str()])
        .collect();

    let nodes: Vec<GraphNode> = nodes
        .into_iter()
        .filter(|node| connected.contains(node.id.as_str()) || keep == Some(node.id.as_str()))
        .collect();

    let edges = prune_edges(&nodes, edges);
    GraphData::new(nodes, edges)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
