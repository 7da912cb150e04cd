//! Refresh token entity model.

use sqlx::FromRow;
use tamagochi_core::types::{DbId, Timestamp};

/// A refresh token row from the `refresh_tokens` table.
///
/// Only the SHA-256 hash of the token is stored; the plaintext lives solely
/// with the client. Never serialized into API responses.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshToken {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}
