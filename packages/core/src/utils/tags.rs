//! Tag extraction utilities
//!
//! Reads tag lists out of note content regardless of which shape the content
//! was stored in, and builds the tag catalogue shown in the tag picker.

use crate::models::{GraphNode, NoteContent};
use serde_json::Value;
use std::collections::BTreeSet;

/// Extract the tag list from a raw note content value
///
/// Checks `content.tags`, then `content.text.tags`. Any other shape,
/// including `null` and plain strings, yields no tags.
///
/// # Examples
///
/// ```
/// use notegraph_core::utils::extract_tags;
/// use serde_json::json;
///
/// assert_eq!(extract_tags(&json!({"tags": ["a"]})), vec!["a"]);
/// assert_eq!(extract_tags(&json!({"text": {"tags": ["b"]}})), vec!["b"]);
/// assert!(extract_tags(&json!("plain string")).is_empty());
/// ```
pub fn extract_tags(content: &Value) -> Vec<String> {
    NoteContent::from_value(content).tags().to_vec()
}

/// Sorted, de-duplicated tags across a node set
pub fn collect_tags(nodes: &[GraphNode]) -> Vec<String> {
    nodes
        .iter()
        .flat_map(|node| node.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;
    use serde_json::json;

    #[test]
    fn test_extract_tags_fallbacks() {
        assert_eq!(extract_tags(&json!({"tags": ["a"]})), vec!["a".to_string()]);
        assert_eq!(
            extract_tags(&json!({"text": {"tags": ["b"]}})),
            vec!["b".to_string()]
        );
        assert!(extract_tags(&json!("plain string")).is_empty());
        assert!(extract_tags(&json!(null)).is_empty());
        assert!(extract_tags(&json!({})).is_empty());
    }

    #[test]
    fn test_extract_tags_ignores_malformed_entries() {
        assert!(extract_tags(&json!({"tags": "a,b"})).is_empty());
        assert!(extract_tags(&json!({"text": "body", "tags": null})).is_empty());
        assert!(extract_tags(&json!([["a"]])).is_empty());
        assert_eq!(
            extract_tags(&json!({"tags": ["a", 1, null, "b"]})),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_collect_tags_sorted_unique() {
        let nodes = vec![
            GraphNode::from_note(Note::new("1", "One", json!({"tags": ["rust", "graph"]}).into())),
            GraphNode::from_note(Note::new("2", "Two", json!({"tags": ["graph"]}).into())),
            GraphNode::from_note(Note::new("3", "Three", "no tags".into())),
        ];

        assert_eq!(collect_tags(&nodes), vec!["graph".to_string(), "rust".to_string()]);
    }
}
