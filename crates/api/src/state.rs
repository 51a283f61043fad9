use std::sync::Arc;

use scribe_db::cache::ProjectCache;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: scribe_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read-through project metadata cache.
    pub project_cache: Arc<ProjectCache>,
}
