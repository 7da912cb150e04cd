//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tamagochi_core::types::{DbId, Timestamp};

/// A user row from the `users` table.
///
/// Partner accounts created during onboarding have neither an email nor a
/// password; they exist only as a parent identity.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub email: Option<String>,
    /// Never serialized into API responses.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: Option<String>,
    pub password_hash: Option<String>,
}
