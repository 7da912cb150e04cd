//! Family entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tamagochi_core::types::{DbId, Timestamp};

/// A family row from the `families` table.
///
/// A family is one parent pair; the ordered pair is unique
/// (`uq_families_parents`). Families are never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub id: DbId,
    pub father_id: DbId,
    pub mother_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a new family.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFamily {
    pub father_id: DbId,
    pub mother_id: DbId,
}
