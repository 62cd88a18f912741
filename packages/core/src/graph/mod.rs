//! Note Graph Pipeline
//!
//! Pure transformation from notes and links to a positioned graph:
//!
//! ```text
//! notes + links -> build_graph -> filter_graph -> [remove_isolated_nodes] -> layout
//! ```
//!
//! Nothing here performs I/O or keeps state between calls; the output is a
//! function of (notes, links, options, config) alone.
//!
//! # Examples
//!
//! ```rust
//! use notegraph_core::config::GraphOptions;
//! use notegraph_core::graph::{filter_and_layout, LayoutType};
//! use notegraph_core::models::{Link, Note};
//!
//! let notes = vec![
//!     Note::new("a", "Alpha", "first".into()),
//!     Note::new("b", "Beta", "second".into()),
//! ];
//! let links = vec![Link::new("l1", "a", "b")];
//!
//! let graph = filter_and_layout(
//!     notes,
//!     &links,
//!     &GraphOptions::default().with_layout(LayoutType::Radial),
//! );
//! assert_eq!(graph.nodes.len(), 2);
//! assert_eq!(graph.edges.len(), 1);
//! ```

pub mod builder;
pub mod filter;
pub mod layout;

pub use builder::build_graph;
pub use filter::{filter_graph, prune_edges, remove_isolated_nodes};
pub use layout::{layout, LayoutType};

use crate::config::{GraphOptions, LayoutConfig};
use crate::models::{GraphData, Link, Note};

/// Build, filter and lay out a graph with the default layout constants
pub fn filter_and_layout(notes: Vec<Note>, links: &[Link], options: &GraphOptions) -> GraphData {
    filter_and_layout_with(notes, links, options, &LayoutConfig::default())
}

/// Same as [`filter_and_layout`] with explicit layout constants
pub fn filter_and_layout_with(
    notes: Vec<Note>,
    links: &[Link],
    options: &GraphOptions,
    config: &LayoutConfig,
) -> GraphData {
    let graph = build_graph(notes, links, None);
    apply_options(graph, options, config, None)
}

/// Filter and lay out an already built graph
///
/// `keep` names a node exempt from isolated-node removal.
pub(crate) fn apply_options(
    graph: GraphData,
    options: &GraphOptions,
    config: &LayoutConfig,
    keep: Option<&str>,
) -> GraphData {
    let mut graph = filter_graph(
        graph.nodes,
        graph.edges,
        options.active_search(),
        &options.selected_tags,
    );

    if !options.show_isolated_nodes {
        graph = remove_isolated_nodes(graph, keep);
    }

    let nodes = layout(graph.nodes, &graph.edges, options.layout_type, config);
    GraphData::new(nodes, graph.edges)
}
