//! Client for the Replicate image-synthesis API.
//!
//! [`ReplicateClient`] wraps the single outbound call the platform makes:
//! synthesizing a child face from two parent photos with the
//! `easel/ai-avatars` model. The [`GenerationBackend`] trait is the seam
//! the pipeline consumes, so tests can substitute a fake without touching
//! the network.

pub mod client;
pub mod output;

pub use client::ReplicateClient;

use async_trait::async_trait;

/// Errors from the external generation layer.
///
/// Failures are terminal: no retry or fallback is attempted, a single
/// failed call fails the whole orchestration.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// No API credential was present when the client was constructed.
    #[error("Replicate API is not configured")]
    NotConfigured,

    /// The external service failed (transport error, non-2xx status, or a
    /// prediction that finished in a failed state). Carries the upstream
    /// message verbatim.
    #[error("Failed to generate child face: {0}")]
    Upstream(String),

    /// The external call succeeded but returned a shape we cannot decode.
    #[error("Unexpected output format from Replicate: {0}")]
    Protocol(String),
}

/// The outbound image-synthesis capability used by the generation pipeline.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Whether the backend holds a credential and can be invoked.
    ///
    /// The orchestrator checks this before doing any other work so an
    /// unconfigured deployment fails without side effects.
    fn is_available(&self) -> bool;

    /// Synthesize a child image from two parent photo URLs.
    ///
    /// Returns the remote URL of the generated image. A `None` prompt uses
    /// the model's default child-portrait prompt.
    async fn synthesize_child_image(
        &self,
        parent1_url: &str,
        parent2_url: &str,
        prompt: Option<&str>,
    ) -> Result<String, GenerationError>;
}
