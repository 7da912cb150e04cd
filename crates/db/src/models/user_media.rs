//! Parent media entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tamagochi_core::types::{DbId, Timestamp};

/// A media row from the `user_media` table.
///
/// `file_path` is either root-relative (`/uploads/...`) or an absolute URL.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMedia {
    pub id: DbId,
    pub user_id: DbId,
    pub file_path: String,
    /// `"photo"` or `"video"`; only photos are eligible as generation input.
    pub media_type: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for registering a new media entry for a user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserMedia {
    pub user_id: DbId,
    pub file_path: String,
    pub media_type: String,
    /// Defaults to 0 (appended at the front of stored order) if omitted.
    pub sort_order: Option<i32>,
}
