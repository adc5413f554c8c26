use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single persisted note. This is both the on-disk document and the
/// wire representation, serialized with camelCase field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Set once at creation, immutable thereafter.
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at` at creation, refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

/// Request body for create and update. Fields are optional so a missing
/// field and an empty field produce the same validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct NotePayload {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl NotePayload {
    /// Validates the payload and returns the trimmed `(title, body)` pair
    /// that should be persisted. Leading/trailing whitespace is never stored.
    pub fn validate(&self) -> Result<(String, String), String> {
        let title = match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => return Err("title is required".to_string()),
        };

        let body = match self.body.as_deref().map(str::trim) {
            Some(b) if !b.is_empty() => b.to_string(),
            _ => return Err("body is required".to_string()),
        };

        Ok((title, body))
    }
}
