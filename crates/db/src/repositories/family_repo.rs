//! Repository for the `families` table.
//!
//! Families are insert-only: no update or delete operations exist.

use sqlx::PgPool;
use tamagochi_core::types::DbId;

use crate::models::family::{CreateFamily, Family};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, father_id, mother_id, created_at";

/// Provides lookup and insert operations for families.
pub struct FamilyRepo;

impl FamilyRepo {
    /// Insert a new family, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFamily) -> Result<Family, sqlx::Error> {
        let query = format!(
            "INSERT INTO families (father_id, mother_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Family>(&query)
            .bind(input.father_id)
            .bind(input.mother_id)
            .fetch_one(pool)
            .await
    }

    /// Find a family by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Family>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM families WHERE id = $1");
        sqlx::query_as::<_, Family>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a family by the exact ordered parent pair.
    pub async fn find_by_parents(
        pool: &PgPool,
        father_id: DbId,
        mother_id: DbId,
    ) -> Result<Option<Family>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM families
             WHERE father_id = $1 AND mother_id = $2
             LIMIT 1"
        );
        sqlx::query_as::<_, Family>(&query)
            .bind(father_id)
            .bind(mother_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the first family where the given user appears as either parent.
    pub async fn find_by_member(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Family>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM families
             WHERE father_id = $1 OR mother_id = $1
             LIMIT 1"
        );
        sqlx::query_as::<_, Family>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
