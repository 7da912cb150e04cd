use tamagochi_core::types::DbId;
use tamagochi_replicate::GenerationError;

/// Failure taxonomy for the child-generation pipeline.
///
/// Every failure aborts the remaining steps; family and child rows created
/// before the failure are deliberately left in place so a retried call can
/// resume without re-deriving parents.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The external generation client holds no credential. Checked first;
    /// no partial work is performed.
    #[error("Replicate API is not configured")]
    NotConfigured,

    /// A user-correctable precondition is missing (no family, no photos).
    /// The message is surfaced to the caller verbatim.
    #[error("{0}")]
    Precondition(String),

    /// A referenced parent identity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The external synthesis call failed or returned an undecodable shape.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The generated artifact could not be fetched (non-2xx status).
    #[error("Failed to download image: {status} {status_text}")]
    Download { status: u16, status_text: String },

    /// Transport error while fetching the generated artifact.
    #[error("Failed to download image: {0}")]
    Transfer(#[from] reqwest::Error),

    /// Local storage error while persisting the artifact.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
