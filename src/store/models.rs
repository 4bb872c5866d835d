//! Domain models for the note store.

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in a note summary.
pub const SUMMARY_MAX_CHARS: usize = 50;

/// A stored note.
///
/// `id` is assigned by the store and never changes; `content` may be any
/// text, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
}

/// Listing entry: the id plus a short descriptor instead of the full body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: String,
    pub summary: String,
}

impl NoteSummary {
    /// Listing entry for the note `id` with the given body.
    pub fn new(id: impl Into<String>, content: &str) -> Self {
        Self {
            id: id.into(),
            summary: summarize(content),
        }
    }
}

/// First line of `content`, cut to [`SUMMARY_MAX_CHARS`] characters.
pub fn summarize(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    let mut chars = first_line.chars();
    let head: String = chars.by_ref().take(SUMMARY_MAX_CHARS).collect();

    if chars.next().is_some() || content.lines().nth(1).is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
