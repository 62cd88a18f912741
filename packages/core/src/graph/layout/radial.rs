//! Radial layout: hub at the center, everything else on one ring

use super::{index_of, resolved_edges};
use crate::config::LayoutConfig;
use crate::models::{GraphEdge, GraphNode, Position};
use std::f64::consts::TAU;

pub(super) fn apply(nodes: &mut [GraphNode], edges: &[GraphEdge], config: &LayoutConfig) {
    let order = rank_by_degree(nodes, edges);
    let Some((hub, ring)) = order.split_first() else {
        return;
    };

    nodes[*hub].position = Position::ORIGIN;

    if ring.is_empty() {
        return;
    }

    let step = TAU / ring.len() as f64;
    for (slot, &node) in ring.iter().enumerate() {
        let angle = step * slot as f64;
        nodes[node].position = Position::new(
            config.ring_radius * angle.cos(),
            config.ring_radius * angle.sin(),
        );
    }
}

/// Node indices sorted by total degree, highest first
///
/// Ties keep input order. Duplicate edges each count, and a self-loop adds
/// one to both the in and out degree of its node.
fn rank_by_degree(nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<usize> {
    let index = index_of(nodes);
    let mut degree = vec![0usize; nodes.len()];
    for (source, target) in resolved_edges(&index, edges) {
        degree[source] += 1;
        degree[target] += 1;
    }

    let mut order: Vec<usize> = (0..nodes.len()).collect();
    // sort_by_key is stable
    order.sort_by_key(|&i| std::cmp::Reverse(degree[i]));
    order
}
