//! Route definitions for the `/generation` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

/// Routes mounted at `/generation`.
///
/// ```text
/// POST /child -> generate_child (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/child", post(generation::generate_child))
}
