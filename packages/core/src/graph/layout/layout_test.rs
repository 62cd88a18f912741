//! Tests for the layout strategies

#[cfg(test)]
mod tests {
    use crate::config::LayoutConfig;
    use crate::graph::layout::hierarchical::assign_levels;
    use crate::graph::layout::{layout, LayoutType};
    use crate::models::{GraphEdge, GraphNode, Note, NoteContent, Position};

    const EPSILON: f64 = 1e-9;

    fn nodes(ids: &[&str]) -> Vec<GraphNode> {
        ids.iter()
            .map(|id| GraphNode::from_note(Note::new(*id, id.to_uppercase(), NoteContent::Empty)))
            .collect()
    }

    fn numbered(count: usize) -> Vec<GraphNode> {
        let ids: Vec<String> = (0..count).map(|i| format!("n{i}")).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        nodes(&refs)
    }

    fn edge(source: &str, target: &str) -> GraphEdge {
        GraphEdge::new(source, target)
    }

    fn position_of(nodes: &[GraphNode], id: &str) -> Position {
        nodes.iter().find(|n| n.id == id).unwrap().position
    }

    fn assert_close(actual: Position, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < EPSILON && (actual.y - y).abs() < EPSILON,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    #[test]
    fn test_layout_type_parsing() {
        assert_eq!("radial".parse::<LayoutType>().unwrap(), LayoutType::Radial);
        assert_eq!(LayoutType::Hierarchical.to_string(), "hierarchical");
        assert!("spring".parse::<LayoutType>().is_err());
        assert_eq!(LayoutType::default(), LayoutType::Force);

        let parsed: LayoutType = serde_json::from_str("\"hierarchical\"").unwrap();
        assert_eq!(parsed, LayoutType::Hierarchical);
    }

    #[test]
    fn test_empty_input_for_every_layout() {
        for layout_type in LayoutType::ALL {
            let laid_out = layout(vec![], &[], layout_type, &LayoutConfig::default());
            assert!(laid_out.is_empty());
        }
    }

    #[test]
    fn test_layout_only_changes_positions() {
        let input = nodes(&["a", "b", "c"]);
        let edges = vec![edge("a", "b"), edge("b", "c")];

        for layout_type in LayoutType::ALL {
            let laid_out = layout(input.clone(), &edges, layout_type, &LayoutConfig::default());
            assert_eq!(laid_out.len(), input.len());
            for (before, after) in input.iter().zip(&laid_out) {
                assert_eq!(before.id, after.id);
                assert_eq!(before.data, after.data);
                assert_eq!(before.node_type, after.node_type);
            }
        }
    }

    #[test]
    fn test_positions_are_finite_with_dangling_edges_and_self_loops() {
        let input = nodes(&["a", "b", "c", "d"]);
        let edges = vec![edge("a", "a"), edge("a", "ghost"), edge("ghost", "b"), edge("c", "d")];

        for layout_type in LayoutType::ALL {
            let laid_out = layout(input.clone(), &edges, layout_type, &LayoutConfig::default());
            assert!(laid_out.iter().all(|n| n.position.is_finite()));
        }
    }

    // ---------------------------------------------------------------------
    // Force
    // ---------------------------------------------------------------------

    #[test]
    fn test_force_single_node_at_origin() {
        let laid_out = layout(nodes(&["a"]), &[], LayoutType::Force, &LayoutConfig::default());
        assert_close(laid_out[0].position, 0.0, 0.0);
    }

    #[test]
    fn test_force_small_graph_uses_centered_grid() {
        let laid_out = layout(
            nodes(&["a", "b", "c", "d"]),
            &[],
            LayoutType::Force,
            &LayoutConfig::default(),
        );

        assert_close(laid_out[0].position, -50.0, -50.0);
        assert_close(laid_out[1].position, 50.0, -50.0);
        assert_close(laid_out[2].position, -50.0, 50.0);
        assert_close(laid_out[3].position, 50.0, 50.0);
    }

    #[test]
    fn test_force_partial_last_row() {
        let laid_out = layout(
            nodes(&["a", "b", "c", "d", "e"]),
            &[],
            LayoutType::Force,
            &LayoutConfig::default(),
        );

        // ceil(sqrt(5)) = 3 columns, 2 rows
        assert_close(laid_out[0].position, -100.0, -50.0);
        assert_close(laid_out[2].position, 100.0, -50.0);
        assert_close(laid_out[3].position, -100.0, 50.0);
        assert_close(laid_out[4].position, 0.0, 50.0);
    }

    #[test]
    fn test_force_fifty_nodes_still_grid() {
        let laid_out = layout(numbered(50), &[], LayoutType::Force, &LayoutConfig::default());

        // 8 columns, 7 rows
        assert_close(laid_out[0].position, -350.0, -300.0);
        assert_close(laid_out[9].position, -250.0, -200.0);
    }

    #[test]
    fn test_force_large_graph_uses_circle() {
        let laid_out = layout(numbered(64), &[], LayoutType::Force, &LayoutConfig::default());

        // radius = sqrt(64) * 100
        assert_close(laid_out[0].position, 800.0, 0.0);
        assert_close(laid_out[16].position, 0.0, 800.0);
        for node in &laid_out {
            let distance = node.position.x.hypot(node.position.y);
            assert!((distance - 800.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_force_is_deterministic() {
        let edges = vec![edge("n0", "n1")];
        for count in [7, 120] {
            let first = layout(numbered(count), &edges, LayoutType::Force, &LayoutConfig::default());
            let second = layout(numbered(count), &edges, LayoutType::Force, &LayoutConfig::default());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_force_respects_config() {
        let config = LayoutConfig {
            node_radius: 10.0,
            circle_threshold: 2,
            ..Default::default()
        };
        let laid_out = layout(nodes(&["a", "b", "c", "d"]), &[], LayoutType::Force, &config);
        // circle of radius sqrt(4) * 10
        assert_close(laid_out[0].position, 20.0, 0.0);
        assert_close(laid_out[2].position, -20.0, 0.0);
    }

    // ---------------------------------------------------------------------
    // Radial
    // ---------------------------------------------------------------------

    #[test]
    fn test_radial_places_highest_degree_node_at_center() {
        let edges = vec![edge("b", "a"), edge("b", "c"), edge("b", "c")];
        let laid_out = layout(nodes(&["a", "b", "c"]), &edges, LayoutType::Radial, &LayoutConfig::default());

        assert_close(position_of(&laid_out, "b"), 0.0, 0.0);
        // c (degree 2) before a (degree 1) on the ring
        assert_close(position_of(&laid_out, "c"), 200.0, 0.0);
        assert_close(position_of(&laid_out, "a"), -200.0, 0.0);
    }

    #[test]
    fn test_radial_ties_keep_input_order() {
        let laid_out = layout(
            nodes(&["x", "y", "z", "w"]),
            &[],
            LayoutType::Radial,
            &LayoutConfig::default(),
        );

        assert_close(position_of(&laid_out, "x"), 0.0, 0.0);
        assert_close(position_of(&laid_out, "y"), 200.0, 0.0);
        let z = position_of(&laid_out, "z");
        assert!((z.y - 200.0 * (std::f64::consts::TAU / 3.0).sin()).abs() < EPSILON);
    }

    #[test]
    fn test_radial_single_node_is_hub() {
        let laid_out = layout(nodes(&["solo"]), &[], LayoutType::Radial, &LayoutConfig::default());
        assert_close(laid_out[0].position, 0.0, 0.0);
    }

    #[test]
    fn test_radial_self_loop_counts_twice() {
        let edges = vec![edge("b", "b"), edge("a", "c")];
        let laid_out = layout(nodes(&["a", "b", "c"]), &edges, LayoutType::Radial, &LayoutConfig::default());
        assert_close(position_of(&laid_out, "b"), 0.0, 0.0);
    }

    #[test]
    fn test_radial_ring_nodes_on_radius() {
        let edges: Vec<GraphEdge> = (1..10).map(|i| edge("n0", &format!("n{i}"))).collect();
        let laid_out = layout(numbered(10), &edges, LayoutType::Radial, &LayoutConfig::default());

        assert_close(laid_out[0].position, 0.0, 0.0);
        for node in &laid_out[1..] {
            let distance = node.position.x.hypot(node.position.y);
            assert!((distance - 200.0).abs() < 1e-6);
        }
    }

    // ---------------------------------------------------------------------
    // Hierarchical
    // ---------------------------------------------------------------------

    #[test]
    fn test_hierarchical_cycle_terminates_with_first_node_as_root() {
        let input = nodes(&["a", "b", "c"]);
        let edges = vec![edge("a", "b"), edge("b", "c"), edge("c", "a")];

        assert_eq!(assign_levels(&input, &edges), vec![0, 1, 2]);

        let laid_out = layout(input, &edges, LayoutType::Hierarchical, &LayoutConfig::default());
        assert_close(position_of(&laid_out, "a"), 0.0, -150.0);
        assert_close(position_of(&laid_out, "b"), 0.0, 0.0);
        assert_close(position_of(&laid_out, "c"), 0.0, 150.0);
    }

    #[test]
    fn test_hierarchical_first_visit_wins() {
        // a -> c is walked before a -> b -> c, so c stays on level 1
        let input = nodes(&["a", "b", "c"]);
        let edges = vec![edge("a", "c"), edge("a", "b"), edge("b", "c")];
        assert_eq!(assign_levels(&input, &edges), vec![0, 1, 1]);

        // b is walked first here, so c lands on level 2 rather than 1
        let edges = vec![edge("a", "b"), edge("a", "c"), edge("b", "c")];
        assert_eq!(assign_levels(&input, &edges), vec![0, 1, 2]);
    }

    #[test]
    fn test_hierarchical_unreachable_cycle_is_level_zero() {
        let input = nodes(&["root", "x", "y"]);
        let edges = vec![edge("x", "y"), edge("y", "x")];
        assert_eq!(assign_levels(&input, &edges), vec![0, 0, 0]);

        let laid_out = layout(input, &edges, LayoutType::Hierarchical, &LayoutConfig::default());
        assert_close(position_of(&laid_out, "root"), -120.0, 0.0);
        assert_close(position_of(&laid_out, "x"), 0.0, 0.0);
        assert_close(position_of(&laid_out, "y"), 120.0, 0.0);
    }

    #[test]
    fn test_hierarchical_levels_centered() {
        let input = nodes(&["root", "left", "right", "leaf"]);
        let edges = vec![edge("root", "left"), edge("root", "right"), edge("left", "leaf")];
        let laid_out = layout(input, &edges, LayoutType::Hierarchical, &LayoutConfig::default());

        assert_close(position_of(&laid_out, "root"), 0.0, -150.0);
        assert_close(position_of(&laid_out, "left"), -60.0, 0.0);
        assert_close(position_of(&laid_out, "right"), 60.0, 0.0);
        assert_close(position_of(&laid_out, "leaf"), 0.0, 150.0);
    }

    #[test]
    fn test_hierarchical_multiple_roots_share_level_zero() {
        let input = nodes(&["a", "b", "child"]);
        let edges = vec![edge("a", "child"), edge("b", "child")];
        assert_eq!(assign_levels(&input, &edges), vec![0, 0, 1]);
    }

    #[test]
    fn test_hierarchical_self_loop_only() {
        let input = nodes(&["a"]);
        let edges = vec![edge("a", "a")];
        let laid_out = layout(input, &edges, LayoutType::Hierarchical, &LayoutConfig::default());
        assert_close(laid_out[0].position, 0.0, 0.0);
    }
}
