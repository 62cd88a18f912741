//! Local Graph Assembly
//!
//! Builds the graph around a single focal note: the note itself, the notes it
//! links to or is linked from (one hop, optionally two), and the links among
//! them. The gathered snapshot then goes through the same filter and layout
//! pipeline as the full graph.
//!
//! # Query Plan
//!
//! 1. Focal note + links touching the focal note (concurrent)
//! 2. For a two-hop graph, links touching the first-hop set
//! 3. Notes in the connected set + links touching the connected set (concurrent)
//!
//! The final link query is a superset; edges to notes outside the connected
//! set are dropped by the builder's visible-id check.
//!
//! # Failure Semantics
//!
//! - An unknown focal id is an error ([`GraphServiceError::NoteNotFound`]).
//! - [`LocalGraphService::assemble`] turns store failures into an empty graph
//!   after logging them; [`LocalGraphService::try_assemble`] returns them.

use crate::config::{GraphOptions, LayoutConfig};
use crate::db::{LinkRepository, NoteRepository};
use crate::graph::{apply_options, build_graph};
use crate::models::{GraphData, Link, Note};
use crate::services::GraphServiceError;
use std::collections::HashSet;
use std::sync::Arc;

pub struct LocalGraphService {
    notes: Arc<dyn NoteRepository>,
    links: Arc<dyn LinkRepository>,
    config: LayoutConfig,
}

impl LocalGraphService {
    pub fn new(notes: Arc<dyn NoteRepository>, links: Arc<dyn LinkRepository>) -> Self {
        Self {
            notes,
            links,
            config: LayoutConfig::default(),
        }
    }

    /// Create a service with custom layout constants
    ///
    /// # Errors
    ///
    /// Returns `GraphServiceError::InvalidConfig` if the config fails validation.
    pub fn with_config(
        notes: Arc<dyn NoteRepository>,
        links: Arc<dyn LinkRepository>,
        config: LayoutConfig,
    ) -> Result<Self, GraphServiceError> {
        config
            .validate()
            .map_err(GraphServiceError::invalid_config)?;
        Ok(Self {
            notes,
            links,
            config,
        })
    }

    /// Create a service backed by one store serving both notes and links
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: NoteRepository + LinkRepository + 'static,
    {
        Self::new(store.clone(), store)
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Assemble the local graph, degrading store failures to an empty graph
    pub async fn assemble(
        &self,
        focal_id: &str,
        options: &GraphOptions,
    ) -> Result<GraphData, GraphServiceError> {
        match self.try_assemble(focal_id, options).await {
            Err(GraphServiceError::Store(err)) => {
                tracing::error!(
                    "Failed to load local graph for note {}, returning empty graph: {}",
                    focal_id,
                    err
                );
                Ok(GraphData::default())
            }
            result => result,
        }
    }

    /// Assemble the local graph, returning every failure to the caller
    pub async fn try_assemble(
        &self,
        focal_id: &str,
        options: &GraphOptions,
    ) -> Result<GraphData, GraphServiceError> {
        let (notes, links, visible) = self.gather(focal_id, options.effective_depth()).await?;

        let graph = build_graph(notes, &links, Some(&visible));
        let graph = apply_options(graph, options, &self.config, Some(focal_id));

        tracing::debug!(
            "Local graph for {}: {} nodes, {} edges ({} layout)",
            focal_id,
            graph.nodes.len(),
            graph.edges.len(),
            options.layout_type
        );

        Ok(graph)
    }

    /// Fetch the focal note, its neighbourhood and the candidate links
    async fn gather(
        &self,
        focal_id: &str,
        depth: u8,
    ) -> Result<(Vec<Note>, Vec<Link>, HashSet<String>), GraphServiceError> {
        let (focal, focal_links) = tokio::try_join!(
            self.notes.get_note(focal_id),
            self.links.links_for_note(focal_id)
        )?;
        let focal = focal.ok_or_else(|| GraphServiceError::note_not_found(focal_id))?;

        let mut connected = ConnectedIds::new(focal_id);
        connected.add_endpoints(&focal_links);

        for _ in 1..depth {
            let hop = self.links.links_touching(&connected.ids).await?;
            connected.add_endpoints(&hop);
        }

        let (connected_notes, links) = tokio::try_join!(
            self.notes.get_notes_by_ids(&connected.ids),
            self.links.links_touching(&connected.ids)
        )?;

        // Focal goes first; a copy in `connected_notes` replaces its data in place
        let mut notes = Vec::with_capacity(connected_notes.len() + 1);
        notes.push(focal);
        notes.extend(connected_notes);

        Ok((notes, links, connected.seen))
    }
}

/// Ordered, de-duplicated id set, seeded with the focal id
struct ConnectedIds {
    ids: Vec<String>,
    seen: HashSet<String>,
}

impl ConnectedIds {
    fn new(focal_id: &str) -> Self {
        Self {
            ids: vec![focal_id.to_string()],
            seen: HashSet::from([focal_id.to_string()]),
        }
    }

    fn add_endpoints(&mut self, links: &[Link]) {
        for link in links {
            for id in [&link.source_id, &link.target_id] {
                if self.seen.insert(id.clone()) {
                    self.ids.push(id.clone());
                }
            }
        }
    }
}
