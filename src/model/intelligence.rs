//! Descriptive metadata attached to a token.

use serde::{Deserialize, Serialize};

/// Design intelligence carried alongside a token value.
///
/// Purely descriptive: nothing in the dependency graph reads these fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenIntelligence {
    /// Cognitive load score, 1 (trivial) to 10 (demanding).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognitive_load: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_meaning: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub usage_notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_notes: Option<String>,
}

impl TokenIntelligence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cognitive_load(mut self, score: u8) -> Self {
        self.cognitive_load = Some(score);
        self
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.semantic_meaning = Some(meaning.into());
        self
    }

    pub fn with_usage_note(mut self, note: impl Into<String>) -> Self {
        self.usage_notes.push(note.into());
        self
    }

    pub fn with_accessibility_notes(mut self, notes: impl Into<String>) -> Self {
        self.accessibility_notes = Some(notes.into());
        self
    }
}
