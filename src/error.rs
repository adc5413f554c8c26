//! Error types for the note store.

use thiserror::Error;

/// All errors the note store can surface to callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested id does not resolve to a live note.
    #[error("note not found: {0}")]
    NotFound(String),

    /// An I/O operation on the data directory failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A note could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Short, user-safe message. Internal detail goes to the log, not here.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Note not found".to_string(),
            Self::Io(_) => "Storage error".to_string(),
            Self::Json(_) => "Stored data could not be read".to_string(),
        }
    }
}
