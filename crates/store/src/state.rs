use std::sync::Arc;

use crate::config::ServerConfig;
use crate::repo::CharacterRepo;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory character collection.
    pub repo: Arc<CharacterRepo>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(repo: CharacterRepo, config: ServerConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}
