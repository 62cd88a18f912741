//! Note and Link Data Structures
//!
//! Notes and links are owned by the surrounding application and arrive here as
//! loosely-shaped JSON records. This module turns them into typed values once,
//! at ingestion, so the graph pipeline never has to sniff shapes again.
//!
//! # Content Shapes
//!
//! The `content` field of a note takes one of several forms depending on which
//! code path wrote it:
//!
//! - a plain string (`"meeting notes"`)
//! - a structured object (`{ "text": "...", "tags": ["a"] }`)
//! - a partially migrated object with the tags one level down
//!   (`{ "text": { "text": "...", "tags": ["b"] } }`)
//! - anything else (`null`, numbers, arrays), treated as empty
//!
//! [`NoteContent`] models these as an explicit union and never fails to parse.
//!
//! # Link Endpoints
//!
//! Upstream link records name their endpoints `sourceId`, `source_id` or
//! `source` (symmetrically for the target). [`Link::from_value`] normalizes all
//! three spellings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed form of a note's `content` field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NoteContent {
    /// Missing, `null`, or a value of an unusable type
    #[default]
    Empty,

    /// Plain string content
    Plain(String),

    /// Object carrying `text` and `tags` at the top level
    Structured {
        text: Option<String>,
        tags: Vec<String>,
    },

    /// Object whose tags live under a nested `text` object
    Nested {
        text: Option<String>,
        tags: Vec<String>,
    },
}

impl NoteContent {
    /// Interpret a raw content value
    ///
    /// Tags are taken from the top-level `tags` array when present, otherwise
    /// from `text.tags` when `text` is an object. Non-string tag entries are
    /// dropped.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => NoteContent::Plain(s.clone()),
            Value::Object(map) => {
                if let Some(Value::Array(tags)) = map.get("tags") {
                    return NoteContent::Structured {
                        text: text_of(map.get("text")),
                        tags: string_entries(tags),
                    };
                }

                if let Some(Value::Object(inner)) = map.get("text") {
                    if let Some(Value::Array(tags)) = inner.get("tags") {
                        return NoteContent::Nested {
                            text: text_of(inner.get("text")),
                            tags: string_entries(tags),
                        };
                    }
                }

                NoteContent::Structured {
                    text: text_of(map.get("text")),
                    tags: Vec::new(),
                }
            }
            _ => NoteContent::Empty,
        }
    }

    /// Tags carried by the content, empty when the shape has none
    pub fn tags(&self) -> &[String] {
        match self {
            NoteContent::Structured { tags, .. } | NoteContent::Nested { tags, .. } => tags,
            NoteContent::Empty | NoteContent::Plain(_) => &[],
        }
    }

    /// Searchable text of the content, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            NoteContent::Plain(s) => Some(s),
            NoteContent::Structured { text, .. } | NoteContent::Nested { text, .. } => {
                text.as_deref()
            }
            NoteContent::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NoteContent::Empty)
    }
}

impl From<Value> for NoteContent {
    fn from(value: Value) -> Self {
        NoteContent::from_value(&value)
    }
}

impl From<&str> for NoteContent {
    fn from(text: &str) -> Self {
        NoteContent::Plain(text.to_string())
    }
}

impl From<NoteContent> for Value {
    fn from(content: NoteContent) -> Self {
        fn object(text: Option<String>, tags: Vec<String>) -> Map<String, Value> {
            let mut map = Map::new();
            if let Some(text) = text {
                map.insert("text".to_string(), Value::String(text));
            }
            map.insert(
                "tags".to_string(),
                Value::Array(tags.into_iter().map(Value::String).collect()),
            );
            map
        }

        match content {
            NoteContent::Empty => Value::Null,
            NoteContent::Plain(s) => Value::String(s),
            NoteContent::Structured { text, tags } => Value::Object(object(text, tags)),
            NoteContent::Nested { text, tags } => {
                let mut outer = Map::new();
                outer.insert("text".to_string(), Value::Object(object(text, tags)));
                Value::Object(outer)
            }
        }
    }
}

impl Serialize for NoteContent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NoteContent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(NoteContent::from_value(&value))
    }
}

/// `text` may itself be the nested object; take its inner string in that case
fn text_of(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Object(inner)) => inner
            .get("text")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn string_entries(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// A note as seen by the graph: identity, title, content and optional
/// denormalized tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct Note {
    pub id: String,

    pub title: String,

    pub content: NoteContent,

    /// Top-level tags, independent of `content`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Note {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: NoteContent) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
            tags: None,
        }
    }

    /// Set the denormalized top-level tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a raw note record
    ///
    /// Returns `None` only when the record has no usable `id`. Every other
    /// field falls back to an empty value.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let id = id_of(map.get("id"))?;

        let title = map
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let content = map
            .get("content")
            .map(NoteContent::from_value)
            .unwrap_or_default();

        let tags = match map.get("tags") {
            Some(Value::Array(tags)) => Some(string_entries(tags)),
            _ => None,
        };

        Some(Self {
            id,
            title,
            content,
            tags,
        })
    }

    /// Effective tag list: content tags, or the top-level tags when the
    /// content carries none
    pub fn effective_tags(&self) -> Vec<String> {
        let from_content = self.content.tags();
        if !from_content.is_empty() {
            return from_content.to_vec();
        }
        self.tags.clone().unwrap_or_default()
    }
}

impl TryFrom<Value> for Note {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Note::from_value(&value).ok_or_else(|| "note record is missing an id".to_string())
    }
}

/// Parse a batch of raw note records, skipping the unusable ones
pub fn parse_notes(values: &[Value]) -> Vec<Note> {
    values
        .iter()
        .filter_map(|value| {
            let note = Note::from_value(value);
            if note.is_none() {
                tracing::warn!("Skipping note record without id: {}", value);
            }
            note
        })
        .collect()
}

/// A directed link between two notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct Link {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
}

impl Link {
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
        }
    }

    /// Parse a raw link record, normalizing endpoint field names
    ///
    /// Endpoints resolve as `sourceId ?? source_id ?? source` (likewise for the
    /// target). A record missing either endpoint yields `None`; a missing `id`
    /// is derived from the endpoints.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let source_id = endpoint(map, &["sourceId", "source_id", "source"])?;
        let target_id = endpoint(map, &["targetId", "target_id", "target"])?;
        let id = id_of(map.get("id")).unwrap_or_else(|| format!("{source_id}-{target_id}"));

        Some(Self {
            id,
            source_id,
            target_id,
        })
    }

    pub fn touches(&self, note_id: &str) -> bool {
        self.source_id == note_id || self.target_id == note_id
    }
}

impl TryFrom<Value> for Link {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Link::from_value(&value).ok_or_else(|| "link record is missing an endpoint".to_string())
    }
}

/// Parse a batch of raw link records, skipping those without both endpoints
pub fn parse_links(values: &[Value]) -> Vec<Link> {
    values
        .iter()
        .filter_map(|value| {
            let link = Link::from_value(value);
            if link.is_none() {
                tracing::warn!("Skipping link record without endpoints: {}", value);
            }
            link
        })
        .collect()
}

fn endpoint(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| id_of(map.get(*key)))
}

/// Ids are strings upstream, but numeric ids show up in older records
fn id_of(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
