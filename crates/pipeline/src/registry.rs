//! Family/child registry: idempotent find-or-create operations.
//!
//! The per-family state machine is one-directional:
//! `NO_FAMILY -> FAMILY_NO_CHILD -> FAMILY_WITH_CHILD`. Repeated
//! orchestration calls for the same pair stay in the final state, only
//! appending media.

use sqlx::PgPool;
use tamagochi_core::generation::MEDIA_PHOTO;
use tamagochi_core::types::DbId;
use tamagochi_db::models::child::{Child, ChildMedia, CreateChildMedia};
use tamagochi_db::models::family::{CreateFamily, Family};
use tamagochi_db::repositories::{ChildMediaRepo, ChildRepo, FamilyRepo, UserRepo};

use crate::error::PipelineError;

/// Find the family for the exact ordered parent pair, creating it if
/// absent.
///
/// Creation validates that both identifiers reference existing users;
/// a dangling id fails with `NotFound` before anything is inserted.
pub async fn get_or_create_family(
    pool: &PgPool,
    father_id: DbId,
    mother_id: DbId,
) -> Result<Family, PipelineError> {
    if let Some(family) = FamilyRepo::find_by_parents(pool, father_id, mother_id).await? {
        return Ok(family);
    }

    if !UserRepo::exists(pool, father_id).await? {
        return Err(PipelineError::NotFound {
            entity: "User",
            id: father_id,
        });
    }
    if !UserRepo::exists(pool, mother_id).await? {
        return Err(PipelineError::NotFound {
            entity: "User",
            id: mother_id,
        });
    }

    let family = FamilyRepo::create(
        pool,
        &CreateFamily {
            father_id,
            mother_id,
        },
    )
    .await?;
    tracing::info!(family_id = %family.id, "Created family");
    Ok(family)
}

/// Find the family's child, creating a nameless one if absent.
///
/// The `uq_children_family` constraint makes the insert race-safe: when a
/// concurrent call wins the insert, the unique violation is treated as
/// "already created" and the existing row is fetched instead.
pub async fn get_or_create_child(pool: &PgPool, family_id: DbId) -> Result<Child, PipelineError> {
    if let Some(child) = ChildRepo::find_by_family(pool, family_id).await? {
        return Ok(child);
    }

    match ChildRepo::create(pool, family_id, None).await {
        Ok(child) => {
            tracing::info!(child_id = %child.id, family_id = %family_id, "Created child");
            Ok(child)
        }
        Err(e) if is_unique_violation(&e, "uq_children_family") => {
            ChildRepo::find_by_family(pool, family_id)
                .await?
                .ok_or(PipelineError::Database(e))
        }
        Err(e) => Err(e.into()),
    }
}

/// Append a generated photo to a child's media. Always inserts; rows are
/// never deduplicated.
pub async fn append_child_media(
    pool: &PgPool,
    child_id: DbId,
    file_path: String,
    generation_prompt: Option<String>,
    metadata: serde_json::Value,
) -> Result<ChildMedia, PipelineError> {
    let media = ChildMediaRepo::create(
        pool,
        &CreateChildMedia {
            child_id,
            file_path,
            media_type: MEDIA_PHOTO.to_string(),
            generation_prompt,
            metadata: Some(metadata),
            sort_order: None,
        },
    )
    .await?;
    Ok(media)
}

/// Whether a sqlx error is a PostgreSQL unique violation (23505) on the
/// named constraint.
fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
