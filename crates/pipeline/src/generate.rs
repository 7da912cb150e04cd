//! Child-generation orchestration.
//!
//! One call runs the whole flow: resolve the parent pair, check both
//! parents have photos, synthesize a child face through the generation
//! backend, download the artifact into local storage, then persist the
//! family, child and media rows.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use tamagochi_core::generation::GENERATION_MODEL;
use tamagochi_core::types::DbId;
use tamagochi_db::models::child::ChildMedia;
use tamagochi_replicate::GenerationBackend;

use crate::artifact;
use crate::error::PipelineError;
use crate::parents::{resolve_parents, ParentPair};
use crate::photos::eligible_photo_url;
use crate::registry;

/// A child-generation request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateChildRequest {
    /// Explicit first parent. Both explicit ids must be present to take
    /// effect; a lone one is ignored and family lookup applies.
    pub parent1_user_id: Option<DbId>,
    /// Explicit second parent.
    pub parent2_user_id: Option<DbId>,
    /// Synthesis prompt override. The backend falls back to the default
    /// portrait prompt when absent; the media row records it as given.
    pub prompt: Option<String>,
}

/// The child rows touched by a generation call, shorn of timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildSummary {
    pub id: DbId,
    pub family_id: DbId,
    pub name: Option<String>,
}

/// Successful outcome of one generation call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    pub child: ChildSummary,
    pub media: ChildMedia,
    /// Upstream URL the artifact was downloaded from.
    pub generated_image_url: String,
}

/// Orchestrates child generation end to end.
///
/// Holds the shared pool, the synthesis backend behind its trait, one
/// reused HTTP client for artifact downloads, and the storage/URL
/// configuration the flow needs.
pub struct GenerationPipeline {
    pool: PgPool,
    backend: Arc<dyn GenerationBackend>,
    http: reqwest::Client,
    public_base_url: String,
    uploads_dir: PathBuf,
}

impl GenerationPipeline {
    pub fn new(
        pool: PgPool,
        backend: Arc<dyn GenerationBackend>,
        public_base_url: String,
        uploads_dir: PathBuf,
    ) -> Self {
        Self {
            pool,
            backend,
            http: reqwest::Client::new(),
            public_base_url,
            uploads_dir,
        }
    }

    /// Run one generation call for `caller_id`.
    ///
    /// Fails fast before any side effect when the backend is unconfigured,
    /// the parent pair cannot be resolved, or either parent lacks a photo.
    /// After synthesis succeeds the family and child rows are created (or
    /// found) and a media row is appended; a later failure leaves those
    /// rows in place for the next attempt.
    pub async fn generate_child(
        &self,
        caller_id: DbId,
        request: GenerateChildRequest,
    ) -> Result<GenerationResult, PipelineError> {
        if !self.backend.is_available() {
            return Err(PipelineError::NotConfigured);
        }

        let pair = resolve_parents(
            &self.pool,
            caller_id,
            (request.parent1_user_id, request.parent2_user_id),
        )
        .await?;

        let (photo1, photo2) = tokio::try_join!(
            eligible_photo_url(&self.pool, pair.father_id, &self.public_base_url),
            eligible_photo_url(&self.pool, pair.mother_id, &self.public_base_url),
        )?;
        let (photo1, photo2) = match (photo1, photo2) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(PipelineError::Precondition(
                    "Both parents must have at least one photo uploaded".to_string(),
                ))
            }
        };

        let prompt = request.prompt.as_deref();
        tracing::info!(
            father_id = %pair.father_id,
            mother_id = %pair.mother_id,
            "Generating child face"
        );
        let generated_image_url = self
            .backend
            .synthesize_child_image(&photo1, &photo2, prompt)
            .await?;

        let family = self.family_for_pair(&pair).await?;
        let child = registry::get_or_create_child(&self.pool, family.id).await?;

        let file_path = artifact::fetch_and_store(
            &self.http,
            &generated_image_url,
            child.id,
            &self.uploads_dir,
        )
        .await?;

        let metadata = serde_json::json!({
            "model": GENERATION_MODEL,
            "parent1UserId": pair.father_id,
            "parent2UserId": pair.mother_id,
            "generatedImageUrl": generated_image_url,
        });
        let media = registry::append_child_media(
            &self.pool,
            child.id,
            file_path,
            request.prompt,
            metadata,
        )
        .await?;

        tracing::info!(child_id = %child.id, media_id = %media.id, "Child generation complete");

        Ok(GenerationResult {
            success: true,
            child: ChildSummary {
                id: child.id,
                family_id: child.family_id,
                name: child.name.clone(),
            },
            media,
            generated_image_url,
        })
    }

    /// Look up the family for the resolved pair.
    ///
    /// Generation never creates families; onboarding does. A pair without
    /// a family row is a precondition failure, whether the pair came from
    /// explicit ids or from the caller's own (just-read) family row.
    async fn family_for_pair(
        &self,
        pair: &ParentPair,
    ) -> Result<tamagochi_db::models::family::Family, PipelineError> {
        tamagochi_db::repositories::FamilyRepo::find_by_parents(
            &self.pool,
            pair.father_id,
            pair.mother_id,
        )
        .await?
        .ok_or_else(|| {
            PipelineError::Precondition(
                "No family found for these parents. Complete onboarding first to create a family."
                    .to_string(),
            )
        })
    }
}
