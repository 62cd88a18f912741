//! Graph construction from notes and links

use crate::models::{GraphData, GraphEdge, GraphNode, Link, Note};
use std::collections::{HashMap, HashSet};

/// Build the unpositioned node and edge sets
///
/// One node per note, restricted to `visible_ids` when given. Duplicate note
/// ids collapse into one node: the node keeps the slot of the first occurrence
/// and the data of the last. An edge is emitted for every link whose endpoints
/// both resolved to a node; duplicate links are kept.
pub fn build_graph(
    notes: Vec<Note>,
    links: &[Link],
    visible_ids: Option<&HashSet<String>>,
) -> GraphData {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(notes.len());
    let mut nodes: Vec<GraphNode> = Vec::with_capacity(notes.len());

    for note in notes {
        if let Some(visible) = visible_ids {
            if !visible.contains(&note.id) {
                continue;
            }
        }

        let node = GraphNode::from_note(note);
        match slots.get(&node.id) {
            Some(&slot) => nodes[slot] = node,
            None => {
                slots.insert(node.id.clone(), nodes.len());
                nodes.push(node);
            }
        }
    }

    let edges: Vec<GraphEdge> = links
        .iter()
        .filter(|link| slots.contains_key(&link.source_id) && slots.contains_key(&link.target_id))
        .map(|link| GraphEdge::new(link.source_id.as_str(), link.target_id.as_str()))
        .collect();

    tracing::debug!(
        "Built graph: {} nodes, {} of {} links retained",
        nodes.len(),
        edges.len(),
        links.len()
    );

    GraphData::new(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoteContent, Position};

    fn note(id: &str, title: &str) -> Note {
        Note::new(id, title, NoteContent::Empty)
    }

    #[test]
    fn test_one_node_per_note_at_origin() {
        let graph = build_graph(vec![note("a", "A"), note("b", "B")], &[], None);

        assert_eq!(graph.nodes.len(), 2);
        assert!(graph.edges.is_empty());
        assert!(graph.nodes.iter().all(|n| n.position == Position::ORIGIN));
        assert!(graph.nodes.iter().all(|n| n.node_type == "note"));
    }

    #[test]
    fn test_duplicate_ids_last_write_wins_in_first_slot() {
        let graph = build_graph(
            vec![note("a", "Old"), note("b", "B"), note("a", "New")],
            &[],
            None,
        );

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(graph.nodes[0].title(), "New");
    }

    #[test]
    fn test_edges_require_both_endpoints() {
        let links = vec![
            Link::new("l1", "a", "b"),
            Link::new("l2", "a", "missing"),
            Link::new("l3", "missing", "b"),
        ];
        let graph = build_graph(vec![note("a", "A"), note("b", "B")], &links, None);

        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].source, "a");
        assert_eq!(graph.edges[0].target, "b");
        assert_eq!(graph.edges[0].id, "ea-b");
    }

    #[test]
    fn test_visible_ids_restrict_nodes_and_edges() {
        let links = vec![Link::new("l1", "a", "b"), Link::new("l2", "b", "c")];
        let visible: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let graph = build_graph(
            vec![note("a", "A"), note("b", "B"), note("c", "C")],
            &links,
            Some(&visible),
        );

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].target, "b");
    }

    #[test]
    fn test_duplicate_links_and_self_loops_are_kept() {
        let links = vec![
            Link::new("l1", "a", "b"),
            Link::new("l2", "a", "b"),
            Link::new("l3", "a", "a"),
        ];
        let graph = build_graph(vec![note("a", "A"), note("b", "B")], &links, None);

        assert_eq!(graph.edges.len(), 3);
        assert!(graph.edges[2].is_self_loop());
    }
}
