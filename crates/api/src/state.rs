use std::sync::Arc;

use tamagochi_pipeline::GenerationPipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tamagochi_db::DbPool,
    /// Server configuration (JWT secret, CORS origins, upload paths).
    pub config: Arc<ServerConfig>,
    /// Child-generation orchestrator.
    pub pipeline: Arc<GenerationPipeline>,
}
