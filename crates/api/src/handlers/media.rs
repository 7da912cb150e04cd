//! Handlers for the `/profiles` media resource.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use tamagochi_core::error::CoreError;
use tamagochi_core::generation::{validate_media_type, UPLOADS_URL_PREFIX};
use tamagochi_core::types::DbId;
use tamagochi_db::models::user_media::{CreateUserMedia, UserMedia};
use tamagochi_db::repositories::UserMediaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/profiles/media
///
/// Accepts a multipart form with a required `file` field and optional
/// `mediaType` (default `photo`) and `sortOrder` fields. The file is stored
/// under the uploads directory and a `user_media` row is created for the
/// caller.
pub async fn upload(
    State(state): State<AppState>,
    auth_user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UserMedia>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut media_type = "photo".to_string();
    let mut sort_order: Option<i32> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.jpg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            "mediaType" => {
                media_type = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "sortOrder" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                sort_order = Some(
                    text.parse()
                        .map_err(|_| AppError::BadRequest("sortOrder must be an integer".into()))?,
                );
            }
            _ => {}
        }
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing 'file' field".into()))?;

    validate_media_type(&media_type).map_err(AppError::Core)?;

    let stored_name = stored_file_name(auth_user.user_id, &filename);
    tokio::fs::create_dir_all(&state.config.uploads_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create uploads dir: {e}")))?;
    tokio::fs::write(state.config.uploads_dir.join(&stored_name), &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    let media = UserMediaRepo::create(
        &state.pool,
        &CreateUserMedia {
            user_id: auth_user.user_id,
            file_path: format!("{UPLOADS_URL_PREFIX}/{stored_name}"),
            media_type,
            sort_order,
        },
    )
    .await?;
    tracing::info!(media_id = %media.id, user_id = %auth_user.user_id, "Stored profile media");

    Ok((StatusCode::CREATED, Json(media)))
}

/// GET /api/v1/profiles/{user_id}/media
///
/// List a user's media in stored order.
pub async fn list(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<UserMedia>>> {
    let media = UserMediaRepo::list_by_user(&state.pool, user_id).await?;
    Ok(Json(media))
}

/// Build a collision-resistant stored file name for an upload.
///
/// Keeps the original extension; the original base name is discarded so
/// unsanitized client names never reach the filesystem.
fn stored_file_name(user_id: DbId, original: &str) -> String {
    let ext = std::path::Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg");
    let millis = chrono::Utc::now().timestamp_millis();
    format!("user-{user_id}-{millis}.{ext}")
}
