//! Handlers for the `/children` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tamagochi_core::error::CoreError;
use tamagochi_core::types::DbId;
use tamagochi_db::models::child::{Child, ChildWithMedia};
use tamagochi_db::repositories::{ChildMediaRepo, ChildRepo, FamilyRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/children
///
/// List the children of the caller's family, oldest first. A caller
/// without a family has no children to list and gets a 404.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Child>>> {
    let family = FamilyRepo::find_by_member(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Family for user",
            id: auth_user.user_id,
        }))?;
    let children = ChildRepo::list_by_family(&state.pool, family.id).await?;

    Ok(Json(children))
}

/// GET /api/v1/children/{id}
///
/// Return the child with its media, ordered by sort position then
/// insertion time.
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ChildWithMedia>> {
    let child = ChildRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Child",
            id,
        }))?;
    let media = ChildMediaRepo::list_by_child(&state.pool, id).await?;

    Ok(Json(ChildWithMedia { child, media }))
}

/// Request body for `PUT /children/{id}/name`.
#[derive(Debug, Deserialize)]
pub struct RenameChildRequest {
    pub name: String,
}

/// PUT /api/v1/children/{id}/name
///
/// Set the child's name, returning the updated row.
pub async fn rename(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<RenameChildRequest>,
) -> AppResult<Json<Child>> {
    let child = ChildRepo::update_name(&state.pool, id, &input.name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Child",
            id,
        }))?;
    tracing::info!(child_id = %child.id, "Renamed child");

    Ok(Json(child))
}
