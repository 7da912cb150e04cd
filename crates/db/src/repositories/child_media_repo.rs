//! Repository for the `child_media` table.
//!
//! Child media is append-only: rows are never updated or deduplicated.

use sqlx::PgPool;
use tamagochi_core::types::DbId;

use crate::models::child::{ChildMedia, CreateChildMedia};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, child_id, file_path, media_type, generation_prompt, metadata, sort_order, created_at";

/// Provides append and list operations for child media.
pub struct ChildMediaRepo;

impl ChildMediaRepo {
    /// Insert a new media entry for a child, returning the created row.
    ///
    /// If `sort_order` is `None`, defaults to 0.
    pub async fn create(
        pool: &PgPool,
        input: &CreateChildMedia,
    ) -> Result<ChildMedia, sqlx::Error> {
        let query = format!(
            "INSERT INTO child_media
                 (child_id, file_path, media_type, generation_prompt, metadata, sort_order)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChildMedia>(&query)
            .bind(input.child_id)
            .bind(&input.file_path)
            .bind(&input.media_type)
            .bind(&input.generation_prompt)
            .bind(&input.metadata)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List all media for a child in stored order (sort position, then
    /// insertion time).
    pub async fn list_by_child(
        pool: &PgPool,
        child_id: DbId,
    ) -> Result<Vec<ChildMedia>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM child_media
             WHERE child_id = $1
             ORDER BY sort_order ASC, created_at ASC"
        );
        sqlx::query_as::<_, ChildMedia>(&query)
            .bind(child_id)
            .fetch_all(pool)
            .await
    }
}
