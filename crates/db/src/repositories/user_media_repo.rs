//! Repository for the `user_media` table.

use sqlx::PgPool;
use tamagochi_core::types::DbId;

use crate::models::user_media::{CreateUserMedia, UserMedia};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, file_path, media_type, sort_order, created_at";

/// Provides operations on a parent's uploaded media.
pub struct UserMediaRepo;

impl UserMediaRepo {
    /// Insert a new media entry, returning the created row.
    ///
    /// If `sort_order` is `None`, defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateUserMedia) -> Result<UserMedia, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_media (user_id, file_path, media_type, sort_order)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserMedia>(&query)
            .bind(input.user_id)
            .bind(&input.file_path)
            .bind(&input.media_type)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List all media for a user in stored order (sort position, then
    /// insertion time).
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<UserMedia>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_media
             WHERE user_id = $1
             ORDER BY sort_order ASC, created_at ASC"
        );
        sqlx::query_as::<_, UserMedia>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
