//! In-memory note and link store
//!
//! Reference implementation of both repository traits. Notes and links keep
//! insertion order, so query results (and therefore layouts) are stable.
//!
//! # Snapshots
//!
//! A store can be seeded from a JSON snapshot of the form
//! `{ "notes": [...], "links": [...] }`. Records go through the lenient
//! parsers in [`crate::models`], so unusable records are skipped rather than
//! failing the whole load.

use super::{LinkRepository, NoteRepository, StoreError};
use crate::models::{parse_links, parse_notes, Link, Note};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreState {
    notes: Vec<Note>,
    links: Vec<Link>,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `notes` and `links`
    ///
    /// Later notes replace earlier ones with the same id.
    pub fn with_data(notes: Vec<Note>, links: Vec<Link>) -> Self {
        let mut state = StoreState {
            notes: Vec::with_capacity(notes.len()),
            links,
        };
        for note in notes {
            upsert(&mut state.notes, note);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// Load a store from a parsed JSON snapshot
    pub fn from_snapshot(snapshot: &Value) -> Result<Self, StoreError> {
        let root = snapshot
            .as_object()
            .ok_or_else(|| StoreError::invalid_snapshot("snapshot must be a JSON object"))?;

        let records = |key: &str| -> Result<Vec<Value>, StoreError> {
            match root.get(key) {
                None | Some(Value::Null) => Ok(Vec::new()),
                Some(Value::Array(items)) => Ok(items.clone()),
                Some(_) => Err(StoreError::invalid_snapshot(format!(
                    "'{}' must be an array",
                    key
                ))),
            }
        };

        let notes = parse_notes(&records("notes")?);
        let links = parse_links(&records("links")?);

        tracing::info!(
            "Loaded snapshot: {} notes, {} links",
            notes.len(),
            links.len()
        );

        Ok(Self::with_data(notes, links))
    }

    /// Load a store from snapshot JSON text
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let snapshot: Value = serde_json::from_str(json)?;
        Self::from_snapshot(&snapshot)
    }

    /// Insert a note, replacing any note with the same id
    pub async fn insert_note(&self, note: Note) {
        let mut state = self.state.write().await;
        upsert(&mut state.notes, note);
    }

    pub async fn insert_link(&self, link: Link) {
        self.state.write().await.links.push(link);
    }

    pub async fn note_count(&self) -> usize {
        self.state.read().await.notes.len()
    }

    pub async fn link_count(&self) -> usize {
        self.state.read().await.links.len()
    }
}

fn upsert(notes: &mut Vec<Note>, note: Note) {
    match notes.iter_mut().find(|existing| existing.id == note.id) {
        Some(existing) => *existing = note,
        None => notes.push(note),
    }
}

#[async_trait]
impl NoteRepository for InMemoryStore {
    async fn get_note(&self, id: &str) -> Result<Option<Note>, StoreError> {
        let state = self.state.read().await;
        Ok(state.notes.iter().find(|note| note.id == id).cloned())
    }

    async fn get_notes_by_ids(&self, ids: &[String]) -> Result<Vec<Note>, StoreError> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let state = self.state.read().await;
        Ok(state
            .notes
            .iter()
            .filter(|note| wanted.contains(note.id.as_str()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn links_for_note(&self, note_id: &str) -> Result<Vec<Link>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .links
            .iter()
            .filter(|link| link.touches(note_id))
            .cloned()
            .collect())
    }

    async fn links_touching(&self, note_ids: &[String]) -> Result<Vec<Link>, StoreError> {
        let wanted: HashSet<&str> = note_ids.iter().map(String::as_str).collect();
        let state = self.state.read().await;
        Ok(state
            .links
            .iter()
            .filter(|link| {
                wanted.contains(link.source_id.as_str()) || wanted.contains(link.target_id.as_str())
            })
            .cloned()
            .collect())
    }
}
