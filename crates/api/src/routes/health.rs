//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
///
/// Always answers 200 so probes can read the body; `status` flips to
/// `degraded` when the database ping fails.
async fn health(State(state): State<AppState>) -> Json<Value> {
    let db_healthy = tamagochi_db::health_check(&state.pool).await.is_ok();

    Json(json!({
        "status": if db_healthy { "ok" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "db_healthy": db_healthy,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
