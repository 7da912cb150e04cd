//! Photo selection: pick the generation input image for one parent.

use sqlx::PgPool;
use tamagochi_core::generation::{to_absolute_url, MEDIA_PHOTO};
use tamagochi_core::types::DbId;
use tamagochi_db::repositories::UserMediaRepo;

use crate::error::PipelineError;

/// Return the absolute URL of a parent's first eligible photo.
///
/// Media is scanned in stored order (sort position, then insertion time);
/// only entries tagged `photo` are eligible. Returns `None` when the
/// parent has no photos at all, even if videos are present.
pub async fn eligible_photo_url(
    pool: &PgPool,
    parent_id: DbId,
    base_url: &str,
) -> Result<Option<String>, PipelineError> {
    let media = UserMediaRepo::list_by_user(pool, parent_id).await?;

    Ok(media
        .iter()
        .find(|m| m.media_type == MEDIA_PHOTO)
        .map(|m| to_absolute_url(base_url, &m.file_path)))
}
