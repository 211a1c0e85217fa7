use std::sync::Arc;

use crate::background::PotentialAutosaver;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: limelight_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Debounced writer for gross-box-office-potential edits.
    pub autosaver: Arc<PotentialAutosaver>,
}
