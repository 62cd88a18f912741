//! Utility functions for NoteGraph Core
//!
//! This module provides common utility functions used across the codebase.

mod tags;

pub use tags::{collect_tags, extract_tags};
