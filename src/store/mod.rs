//! File-backed note storage
//!
//! One JSON document per note, named `<id>.json` inside the data directory.
//! The directory is the single source of truth; nothing is cached in memory.

pub mod note_store;

pub use note_store::NoteStore;
