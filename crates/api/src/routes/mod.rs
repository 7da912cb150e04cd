pub mod auth;
pub mod children;
pub mod family;
pub mod generation;
pub mod health;
pub mod media;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register (public)
/// /auth/login                     login (public)
/// /auth/refresh                   refresh (public)
/// /auth/logout                    logout (requires auth)
///
/// /families                       create family (POST, requires auth)
/// /families/me                    caller's family (GET, requires auth)
///
/// /profiles/media                 upload media (POST multipart, requires auth)
/// /profiles/{user_id}/media       list media (GET, requires auth)
///
/// /children                       family's children (GET, requires auth)
/// /children/{id}                  child with media (GET, requires auth)
/// /children/{id}/name             rename child (PUT, requires auth)
///
/// /generation/child               generate child (POST, requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/families", family::router())
        .nest("/profiles", media::router())
        .nest("/children", children::router())
        .nest("/generation", generation::router())
}

/// Serve uploaded and generated files from the uploads directory.
///
/// Mounted at root level so stored `/uploads/...` paths resolve as-is.
pub fn uploads_service(uploads_dir: &std::path::Path) -> Router<AppState> {
    Router::new().nest_service("/uploads", ServeDir::new(uploads_dir))
}
