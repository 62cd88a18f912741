//! Graph view options and layout tuning
//!
//! `GraphOptions` is what the caller sends per request (search text, tag
//! selection, layout mode). `LayoutConfig` holds the geometric constants the
//! layout strategies share; the defaults match the shipped graph view.

use crate::graph::LayoutType;
use serde::{Deserialize, Serialize};

/// Maximum hop count supported by local-graph assembly
pub const MAX_LOCAL_GRAPH_DEPTH: u8 = 2;

fn default_true() -> bool {
    true
}

fn default_depth() -> u8 {
    1
}

/// Per-request filter and layout options
///
/// Every field is optional on the wire:
///
/// ```
/// use notegraph_core::config::GraphOptions;
/// use notegraph_core::graph::LayoutType;
///
/// let options: GraphOptions =
///     serde_json::from_str(r#"{"searchQuery": "rust", "layoutType": "radial"}"#).unwrap();
/// assert_eq!(options.layout_type, LayoutType::Radial);
/// assert!(options.show_isolated_nodes);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphOptions {
    /// Case-insensitive substring matched against title or content text
    #[serde(default)]
    pub search_query: Option<String>,

    /// Nodes must carry at least one of these tags
    #[serde(default)]
    pub selected_tags: Vec<String>,

    /// When false, nodes without any incident edge are dropped
    #[serde(default = "default_true")]
    pub show_isolated_nodes: bool,

    #[serde(default)]
    pub layout_type: LayoutType,

    /// Link hops gathered around the focal note of a local graph (1 or 2)
    #[serde(default = "default_depth")]
    pub depth: u8,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            search_query: None,
            selected_tags: Vec::new(),
            show_isolated_nodes: true,
            layout_type: LayoutType::default(),
            depth: default_depth(),
        }
    }
}

impl GraphOptions {
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_layout(mut self, layout_type: LayoutType) -> Self {
        self.layout_type = layout_type;
        self
    }

    pub fn hide_isolated_nodes(mut self) -> Self {
        self.show_isolated_nodes = false;
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Search text with surrounding whitespace removed, `None` when blank
    pub fn active_search(&self) -> Option<&str> {
        self.search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Hop count clamped to the supported range
    pub fn effective_depth(&self) -> u8 {
        self.depth.clamp(1, MAX_LOCAL_GRAPH_DEPTH)
    }
}

/// Geometric constants for the layout strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Grid spacing and circle radius unit for the force layout
    pub node_radius: f64,

    /// Node count above which the force layout switches from grid to circle
    pub circle_threshold: usize,

    /// Radius of the ring around the hub in the radial layout
    pub ring_radius: f64,

    /// Gap between siblings within a level of the hierarchical layout
    pub horizontal_spacing: f64,

    /// Gap between levels of the hierarchical layout
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_radius: 100.0,
            circle_threshold: 50,
            ring_radius: 200.0,
            horizontal_spacing: 120.0,
            vertical_spacing: 150.0,
        }
    }
}

impl LayoutConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let spacings = [
            ("node_radius", self.node_radius),
            ("ring_radius", self.ring_radius),
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
        ];

        for (name, value) in spacings {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number", name));
            }
            if value <= 0.0 {
                return Err(format!("{} must be greater than 0", name));
            }
        }

        Ok(())
    }
}
