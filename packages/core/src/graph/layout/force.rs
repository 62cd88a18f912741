//! Force layout approximation
//!
//! No physics is simulated. Graphs up to `circle_threshold` nodes go on a
//! square grid centered at the origin; larger graphs go on a single circle of
//! radius `sqrt(n) * node_radius`, which avoids overlap without O(n²) work.

use super::centered_offset;
use crate::config::LayoutConfig;
use crate::models::{GraphNode, Position};
use std::f64::consts::TAU;

pub(super) fn apply(nodes: &mut [GraphNode], config: &LayoutConfig) {
    let count = nodes.len();
    if count == 0 {
        return;
    }

    if count > config.circle_threshold {
        let radius = (count as f64).sqrt() * config.node_radius;
        let step = TAU / count as f64;
        for (i, node) in nodes.iter_mut().enumerate() {
            let angle = step * i as f64;
            node.position = Position::new(radius * angle.cos(), radius * angle.sin());
        }
        return;
    }

    // Row-major, `columns` wide
    let columns = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(columns);
    for (i, node) in nodes.iter_mut().enumerate() {
        let (row, column) = (i / columns, i % columns);
        node.position = Position::new(
            centered_offset(column, columns, config.node_radius),
            centered_offset(row, rows, config.node_radius),
        );
    }
}
