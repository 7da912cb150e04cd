//! HTTP client for the Replicate predictions API.

use async_trait::async_trait;
use serde::Deserialize;
use tamagochi_core::generation::{DEFAULT_PROMPT, GENDER_NEUTRAL, GENERATION_MODEL};

use crate::output::decode_output;
use crate::{GenerationBackend, GenerationError};

/// Default Replicate API endpoint.
const DEFAULT_API_URL: &str = "https://api.replicate.com";

/// Client for a single Replicate model invocation.
///
/// Constructed once at process start. A missing API token produces an
/// unconfigured client rather than a startup failure; availability must be
/// checked before invoking.
pub struct ReplicateClient {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
}

/// Subset of the Replicate prediction response we care about.
#[derive(Debug, Deserialize)]
struct Prediction {
    status: Option<String>,
    output: Option<serde_json::Value>,
    error: Option<serde_json::Value>,
}

impl ReplicateClient {
    /// Create a client with the given API token (or none).
    pub fn new(api_token: Option<String>) -> Self {
        if api_token.is_none() {
            tracing::warn!(
                "REPLICATE_API_TOKEN is not set. Child generation will be disabled."
            );
        }
        Self {
            client: reqwest::Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
            api_token,
        }
    }

    /// Create a client from the `REPLICATE_API_TOKEN` environment variable.
    pub fn from_env() -> Self {
        Self::new(std::env::var("REPLICATE_API_TOKEN").ok())
    }

    /// Create a client targeting a non-default API endpoint.
    pub fn with_api_url(api_token: Option<String>, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_token,
        }
    }
}

#[async_trait]
impl GenerationBackend for ReplicateClient {
    fn is_available(&self) -> bool {
        self.api_token.is_some()
    }

    /// Run the `easel/ai-avatars` model synchronously (`Prefer: wait`) with
    /// both parent photos and return the generated image URL.
    async fn synthesize_child_image(
        &self,
        parent1_url: &str,
        parent2_url: &str,
        prompt: Option<&str>,
    ) -> Result<String, GenerationError> {
        let token = self
            .api_token
            .as_deref()
            .ok_or(GenerationError::NotConfigured)?;

        let body = serde_json::json!({
            "input": {
                "prompt": prompt.unwrap_or(DEFAULT_PROMPT),
                "face_image": parent1_url,
                "face_image_b": parent2_url,
                "user_gender": GENDER_NEUTRAL,
            },
        });

        tracing::info!(model = GENERATION_MODEL, "Generating child face from two parent photos");

        let response = self
            .client
            .post(format!(
                "{}/v1/models/{}/predictions",
                self.api_url, GENERATION_MODEL
            ))
            .bearer_auth(token)
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Upstream(format!("{status}: {body}")));
        }

        let prediction: Prediction = response
            .json()
            .await
            .map_err(|e| GenerationError::Protocol(e.to_string()))?;

        if let Some(error) = prediction.error.filter(|e| !e.is_null()) {
            return Err(GenerationError::Upstream(error.to_string()));
        }
        if matches!(prediction.status.as_deref(), Some("failed" | "canceled")) {
            return Err(GenerationError::Upstream(format!(
                "prediction finished in state {:?}",
                prediction.status
            )));
        }

        let output = prediction
            .output
            .ok_or_else(|| GenerationError::Protocol("prediction has no output".into()))?;

        let url = decode_output(&output)?;
        tracing::info!(%url, "Child face generated successfully");
        Ok(url)
    }
}
