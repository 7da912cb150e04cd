//! Child and child-media entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tamagochi_core::types::{DbId, Timestamp};

/// A child row from the `children` table.
///
/// Each family has at most one child (`uq_children_family`). The name is
/// optional and never set by the generation pipeline.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: DbId,
    pub family_id: DbId,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A media row from the `child_media` table.
///
/// Rows are append-only; repeated generation calls add further rows for
/// the same child.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildMedia {
    pub id: DbId,
    pub child_id: DbId,
    pub file_path: String,
    pub media_type: String,
    /// Free-text prompt the image was generated with, if any.
    pub generation_prompt: Option<String>,
    /// Structured generation metadata (model, parent ids, source URL).
    pub metadata: Option<serde_json::Value>,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for appending a media entry to a child.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChildMedia {
    pub child_id: DbId,
    pub file_path: String,
    pub media_type: String,
    pub generation_prompt: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub sort_order: Option<i32>,
}

/// A child together with its media, as returned by the children API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildWithMedia {
    #[serde(flatten)]
    pub child: Child,
    pub media: Vec<ChildMedia>,
}
