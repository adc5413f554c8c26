pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod store;

use std::sync::Arc;

use config::Config;
use store::NoteStore;

/// Shared application state handed to every request handler.
pub struct AppState {
    pub store: Arc<NoteStore>,
    pub config: Config,
}
