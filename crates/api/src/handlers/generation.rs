//! Handlers for the `/generation` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tamagochi_pipeline::{GenerateChildRequest, GenerationResult};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/generation/child
///
/// Run the child-generation pipeline for the authenticated caller.
pub async fn generate_child(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<GenerateChildRequest>,
) -> AppResult<(StatusCode, Json<GenerationResult>)> {
    let result = state
        .pipeline
        .generate_child(auth_user.user_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(result)))
}
