//! Route definitions for the `/families` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::family;
use crate::state::AppState;

/// Routes mounted at `/families`.
///
/// ```text
/// POST /    -> create (requires auth)
/// GET  /me  -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(family::create))
        .route("/me", get(family::me))
}
