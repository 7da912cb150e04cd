//! Handlers for the `/families` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tamagochi_core::error::CoreError;
use tamagochi_core::types::DbId;
use tamagochi_db::models::family::Family;
use tamagochi_db::models::user::CreateUser;
use tamagochi_db::repositories::{FamilyRepo, UserRepo};
use tamagochi_pipeline::registry;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /families`.
///
/// The caller is always one parent. The partner is either an existing user
/// (`partnerUserId`) or a bare identity created on the fly when neither
/// field is given.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFamilyRequest {
    pub partner_user_id: Option<DbId>,
}

/// POST /api/v1/families
///
/// Create (or return) the family for the caller and their partner. The
/// caller becomes the first parent of the ordered pair.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateFamilyRequest>,
) -> AppResult<(StatusCode, Json<Family>)> {
    let partner_id = match input.partner_user_id {
        Some(id) => id,
        None => {
            // Bare partner identity with no credentials.
            let partner = UserRepo::create(
                &state.pool,
                &CreateUser {
                    email: None,
                    password_hash: None,
                },
            )
            .await?;
            tracing::info!(partner_id = %partner.id, "Created partner identity");
            partner.id
        }
    };

    let family =
        registry::get_or_create_family(&state.pool, auth_user.user_id, partner_id).await?;
    Ok((StatusCode::CREATED, Json(family)))
}

/// GET /api/v1/families/me
///
/// Return the caller's family, looked up through either parent slot.
pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<Json<Family>> {
    let family = FamilyRepo::find_by_member(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Family for user",
            id: auth_user.user_id,
        }))?;
    Ok(Json(family))
}
