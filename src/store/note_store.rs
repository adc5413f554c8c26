use std::path::PathBuf;

use chrono::Utc;
use tokio::fs;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::Note;

/// Durable CRUD over notes, one JSON file per note.
///
/// Constructed once at startup and shared through `AppState`. Updates are
/// read-modify-write with no per-record locking: concurrent updates to the
/// same id are last-write-wins.
pub struct NoteStore {
    data_dir: PathBuf,
}

impl NoteStore {
    /// Opens the store, creating the data directory if it does not exist yet.
    pub async fn new(data_dir: PathBuf) -> Result<Self> {
        if fs::metadata(&data_dir).await.is_err() {
            fs::create_dir_all(&data_dir).await?;
            log::info!("Created data directory {}", data_dir.display());
        }
        Ok(NoteStore { data_dir })
    }

    /// Maps an id to its file path. Returns `None` for ids that are not
    /// UUID-shaped, so a hostile path segment can never escape the data
    /// directory.
    fn file_path(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return None;
        }
        Some(self.data_dir.join(format!("{}.json", id)))
    }

    /// Serializes and persists a note. The document is written to a
    /// temporary file in the same directory and renamed over the final
    /// path, so a failed write never leaves a partial entry behind.
    async fn persist(&self, note: &Note) -> Result<()> {
        let path = self
            .data_dir
            .join(format!("{}.json", note.id));
        let tmp_path = self.data_dir.join(format!("{}.json.tmp", note.id));

        let json = serde_json::to_string_pretty(note)?;

        if let Err(e) = fs::write(&tmp_path, json).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    /// Creates a new note with a fresh UUID and both timestamps set to now.
    pub async fn create(&self, title: String, body: String) -> Result<Note> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title,
            body,
            created_at: now,
            updated_at: now,
        };

        self.persist(&note).await?;
        log::info!("Created note {}", note.id);
        Ok(note)
    }

    /// Enumerates every persisted note, newest first.
    ///
    /// Entries that cannot be read or decoded are skipped with a warning;
    /// the listing itself never fails. Ties on `created_at` are broken by
    /// descending id so the order stays deterministic.
    pub async fn read_all(&self) -> Vec<Note> {
        let mut read_dir = match fs::read_dir(&self.data_dir).await {
            Ok(rd) => rd,
            Err(e) => {
                log::warn!("Failed to read data directory: {}", e);
                return Vec::new();
            }
        };

        let mut notes = Vec::new();
        while let Ok(Some(entry)) = read_dir.next_entry().await {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let content = match fs::read_to_string(&path).await {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("Skipping unreadable entry {}: {}", path.display(), e);
                    continue;
                }
            };

            match serde_json::from_str::<Note>(&content) {
                Ok(note) => notes.push(note),
                Err(e) => {
                    log::warn!("Skipping malformed entry {}: {}", path.display(), e);
                }
            }
        }

        notes.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        notes
    }

    /// Returns the note for `id`, or `None` if it is missing or its file
    /// cannot be decoded. A corrupt entry is logged but reported the same
    /// as an absent one.
    pub async fn read_one(&self, id: &str) -> Option<Note> {
        let path = self.file_path(id)?;

        let content = match fs::read_to_string(&path).await {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Failed to read note {}: {}", id, e);
                }
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(note) => Some(note),
            Err(e) => {
                log::warn!("Note {} is malformed: {}", id, e);
                None
            }
        }
    }

    /// Replaces title and body of an existing note, refreshing `updated_at`
    /// and preserving `id` and `created_at`.
    pub async fn update(&self, id: &str, title: String, body: String) -> Result<Note> {
        let mut note = self
            .read_one(id)
            .await
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        note.title = title;
        note.body = body;
        note.updated_at = Utc::now();

        self.persist(&note).await?;
        log::info!("Updated note {}", note.id);
        Ok(note)
    }

    /// Physically removes the note file. No tombstone is left behind.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = self
            .file_path(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if fs::metadata(&path).await.is_err() {
            return Err(StoreError::NotFound(id.to_string()));
        }

        fs::remove_file(&path).await?;
        log::info!("Deleted note {}", id);
        Ok(())
    }
}
