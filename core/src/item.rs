//! The todo item record and its creation-time timestamp formatting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// Items are created by the add operation and addressed positionally within
/// the collection afterwards. The `text` field is guaranteed non-empty after
/// trimming by the add/commit-edit boundary, but is stored exactly as
/// entered. Field order matters: the persisted JSON objects carry the fields
/// as `text`, `completed`, `addedAt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Task description. Non-empty after trimming; stored untrimmed.
    pub text: String,
    /// Whether the task has been marked complete.
    pub completed: bool,
    /// Display-formatted creation timestamp. Immutable after creation.
    #[serde(rename = "addedAt")]
    pub added_at: String,
}

impl TodoItem {
    /// Creates a new, not-yet-completed todo item.
    #[must_use]
    pub fn new(text: impl Into<String>, added_at: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            added_at: added_at.into(),
        }
    }

    /// Flips the completion flag and returns the new value.
    pub const fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// Formats a creation timestamp the way it is shown and persisted: a
/// locale-style date followed by the time of day.
///
/// The result is a display string, opaque to every operation; it is stored
/// as-is on the item and never parsed back.
#[must_use]
pub fn display_timestamp(at: DateTime<Utc>) -> String {
    at.format("%x %X").to_string()
}
