//! Parent resolution: decide which two parent identities to generate from.

use sqlx::PgPool;
use tamagochi_core::types::DbId;
use tamagochi_db::repositories::FamilyRepo;

use crate::error::PipelineError;

/// The resolved parent pair for one generation call.
#[derive(Debug, Clone, Copy)]
pub struct ParentPair {
    pub father_id: DbId,
    pub mother_id: DbId,
}

/// Resolve the parent pair for a generation request.
///
/// Both explicit ids supplied: returned verbatim, with no existence check
/// at this stage (downstream lookups fail on dangling ids). Otherwise the
/// caller's family supplies the pair. Neither path yielding a pair is a
/// precondition failure.
pub async fn resolve_parents(
    pool: &PgPool,
    caller_id: DbId,
    explicit: (Option<DbId>, Option<DbId>),
) -> Result<ParentPair, PipelineError> {
    if let (Some(father_id), Some(mother_id)) = explicit {
        return Ok(ParentPair {
            father_id,
            mother_id,
        });
    }

    let family = FamilyRepo::find_by_member(pool, caller_id)
        .await?
        .ok_or_else(|| {
            PipelineError::Precondition(
                "No family found. Please provide parent1UserId and parent2UserId, \
                 or create a family first."
                    .to_string(),
            )
        })?;

    Ok(ParentPair {
        father_id: family.father_id,
        mother_id: family.mother_id,
    })
}
