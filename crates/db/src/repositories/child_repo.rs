//! Repository for the `children` table.

use sqlx::PgPool;
use tamagochi_core::types::DbId;

use crate::models::child::Child;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, family_id, name, created_at, updated_at";

/// Provides lookup, insert and rename operations for children.
pub struct ChildRepo;

impl ChildRepo {
    /// Insert a new child for a family, returning the created row.
    ///
    /// The `uq_children_family` unique constraint limits each family to a
    /// single child; an insert against a family that already has one fails
    /// with a unique violation the caller is expected to handle.
    pub async fn create(
        pool: &PgPool,
        family_id: DbId,
        name: Option<&str>,
    ) -> Result<Child, sqlx::Error> {
        let query = format!(
            "INSERT INTO children (family_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(family_id)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a child by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Child>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM children WHERE id = $1");
        sqlx::query_as::<_, Child>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a family's children, oldest first.
    pub async fn list_by_family(
        pool: &PgPool,
        family_id: DbId,
    ) -> Result<Vec<Child>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM children
             WHERE family_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(family_id)
            .fetch_all(pool)
            .await
    }

    /// Rename a child, returning the updated row or `None` for an unknown id.
    pub async fn update_name(
        pool: &PgPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Child>, sqlx::Error> {
        let query = format!(
            "UPDATE children
             SET name = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Find the family's child (first by creation order).
    pub async fn find_by_family(
        pool: &PgPool,
        family_id: DbId,
    ) -> Result<Option<Child>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM children
             WHERE family_id = $1
             ORDER BY created_at ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(family_id)
            .fetch_optional(pool)
            .await
    }
}
