//! Route definitions for the `/profiles` media resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// POST /media            -> upload (multipart, requires auth)
/// GET  /{user_id}/media  -> list (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/media", post(media::upload))
        .route("/{user_id}/media", get(media::list))
}
