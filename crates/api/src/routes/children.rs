//! Route definitions for the `/children` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::children;
use crate::state::AppState;

/// Routes mounted at `/children`.
///
/// ```text
/// GET /           -> list (requires auth)
/// GET /{id}       -> get_by_id (requires auth)
/// PUT /{id}/name  -> rename (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(children::list))
        .route("/{id}", get(children::get_by_id))
        .route("/{id}/name", put(children::rename))
}
