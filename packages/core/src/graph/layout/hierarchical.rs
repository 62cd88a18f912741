//! Hierarchical layout
//!
//! Edges are read as parent -> child. Roots are the nodes with no incoming
//! edge; when there are none (every node sits on a cycle) the first node is
//! the only root. A depth-first walk from each root, in input order, gives
//! each reachable node the level of its first visit. A visited node is never
//! re-leveled, so a shorter path found later does not win. Nodes no root
//! reaches stay on level 0.
//!
//! Levels are stacked vertically and centered as a whole on y = 0. Within a
//! level nodes keep input order, centered on x = 0.

use super::{centered_offset, index_of, resolved_edges};
use crate::config::LayoutConfig;
use crate::models::{GraphEdge, GraphNode, Position};
use std::collections::BTreeMap;

pub(super) fn apply(nodes: &mut [GraphNode], edges: &[GraphEdge], config: &LayoutConfig) {
    if nodes.is_empty() {
        return;
    }

    let levels = assign_levels(nodes, edges);

    let mut rows: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (node, &level) in levels.iter().enumerate() {
        rows.entry(level).or_default().push(node);
    }

    let row_count = rows.len();
    for (row, members) in rows.values().enumerate() {
        let y = centered_offset(row, row_count, config.vertical_spacing);
        for (slot, &node) in members.iter().enumerate() {
            let x = centered_offset(slot, members.len(), config.horizontal_spacing);
            nodes[node].position = Position::new(x, y);
        }
    }
}

/// Level per node index
pub(super) fn assign_levels(nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<usize> {
    let index = index_of(nodes);
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut incoming = vec![0usize; nodes.len()];
    for (parent, child) in resolved_edges(&index, edges) {
        children[parent].push(child);
        incoming[child] += 1;
    }

    let mut roots: Vec<usize> = (0..nodes.len()).filter(|&i| incoming[i] == 0).collect();
    if roots.is_empty() {
        roots.push(0);
    }

    let mut levels = vec![0usize; nodes.len()];
    let mut visited = vec![false; nodes.len()];

    for root in roots {
        // Explicit stack; children are pushed in reverse so they pop in edge order
        let mut stack = vec![(root, 0usize)];
        while let Some((node, level)) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            levels[node] = levels[node].max(level);

            for &child in children[node].iter().rev() {
                if !visited[child] {
                    stack.push((child, level + 1));
                }
            }
        }
    }

    levels
}
