//! Fireworks inference API clients: embeddings and text completions.
//!
//! Both clients call the hosted Fireworks endpoints directly with
//! `reqwest`. Credentials are passed to the constructors or read from
//! the `FIREWORKS_API_KEY` environment variable via
//! [`FireworksEmbedder::from_env`] / [`FireworksClient::from_env`];
//! there is no process-wide credential state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::completion::{CompletionModel, CompletionParams};
use crate::embedding::Embedder;
use crate::error::{RagError, Result};

/// The Fireworks completions API endpoint.
const FIREWORKS_COMPLETIONS_URL: &str = "https://api.fireworks.ai/inference/v1/completions";

/// The Fireworks embeddings API endpoint.
const FIREWORKS_EMBEDDINGS_URL: &str = "https://api.fireworks.ai/inference/v1/embeddings";

/// Account prefix for first-party Fireworks model names.
const FIREWORKS_MODEL_DIR: &str = "accounts/fireworks/models/";

/// The default model for Fireworks embeddings.
const DEFAULT_EMBEDDING_MODEL: &str = "nomic-ai/nomic-embed-text-v1.5";

/// The default dimensionality for `nomic-embed-text-v1.5`.
const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;

/// The environment variable holding the Fireworks API key.
const API_KEY_ENV: &str = "FIREWORKS_API_KEY";

/// Qualify a short model name with the Fireworks account prefix.
///
/// Names that already contain a `/` (fully-qualified or third-party
/// account paths) pass through unchanged.
fn qualify_model(model: &str) -> String {
    if model.contains('/') {
        model.to_string()
    } else {
        format!("{FIREWORKS_MODEL_DIR}{model}")
    }
}

fn read_api_key_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}

// ── Fireworks API request/response types ───────────────────────────

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Decode an API error body, falling back to the raw text.
fn error_detail(body: String) -> String {
    serde_json::from_str::<ErrorResponse>(&body).map(|e| e.error.message).unwrap_or(body)
}

// ── Completion client ──────────────────────────────────────────────

/// A [`CompletionModel`] backed by the Fireworks completions API.
///
/// Short model names (for example `mistral-7b-instruct-4k`) are
/// qualified with the `accounts/fireworks/models/` prefix; names
/// containing a `/` are sent as-is.
///
/// # Example
///
/// ```rust,ignore
/// use movie_rag::{CompletionModel, CompletionParams, FireworksClient};
///
/// let client = FireworksClient::from_env()?;
/// let params = CompletionParams {
///     model: "mistral-7b-instruct-4k".into(),
///     max_tokens: 2000,
///     temperature: 0.0,
/// };
/// let text = client.complete("[INST]Tell me 2 jokes[/INST]", &params).await?;
/// ```
pub struct FireworksClient {
    client: reqwest::Client,
    api_key: String,
}

impl std::fmt::Debug for FireworksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FireworksClient")
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl FireworksClient {
    /// Create a new client with the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::CompletionError`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(RagError::CompletionError {
                provider: "Fireworks".into(),
                message: "API key must not be empty".into(),
            });
        }
        Ok(Self { client: reqwest::Client::new(), api_key })
    }

    /// Create a new client using the `FIREWORKS_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = read_api_key_env().ok_or_else(|| RagError::CompletionError {
            provider: "Fireworks".into(),
            message: format!("{API_KEY_ENV} environment variable not set"),
        })?;
        Self::new(api_key)
    }
}

#[async_trait]
impl CompletionModel for FireworksClient {
    async fn complete(&self, prompt: &str, params: &CompletionParams) -> Result<String> {
        let model = qualify_model(&params.model);
        debug!(
            provider = "Fireworks",
            model = %model,
            max_tokens = params.max_tokens,
            temperature = params.temperature,
            prompt_len = prompt.len(),
            "requesting completion"
        );

        let request_body = CompletionRequest {
            model: &model,
            prompt,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let response = self
            .client
            .post(FIREWORKS_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Fireworks", error = %e, "completion request failed");
                RagError::CompletionError {
                    provider: "Fireworks".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = error_detail(response.text().await.unwrap_or_default());
            error!(provider = "Fireworks", %status, "completion API error");
            return Err(RagError::CompletionError {
                provider: "Fireworks".into(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            error!(provider = "Fireworks", error = %e, "failed to parse completion response");
            RagError::CompletionError {
                provider: "Fireworks".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        completion.choices.into_iter().next().map(|c| c.text).ok_or_else(|| {
            RagError::CompletionError {
                provider: "Fireworks".into(),
                message: "API returned no choices".into(),
            }
        })
    }
}

// ── Embedding client ───────────────────────────────────────────────

/// An [`Embedder`] backed by the Fireworks embeddings API.
///
/// # Configuration
///
/// - `model` – defaults to `nomic-ai/nomic-embed-text-v1.5`.
/// - `dimensions` – defaults to 768; override with
///   [`with_dimensions`](FireworksEmbedder::with_dimensions) when
///   changing models.
/// - `api_key` – from the constructor or the `FIREWORKS_API_KEY`
///   environment variable.
pub struct FireworksEmbedder {
    client: reqwest::Client,
    api_key: String,
    model: String,
    dimensions: usize,
}

impl std::fmt::Debug for FireworksEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FireworksEmbedder")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("dimensions", &self.dimensions)
            .finish_non_exhaustive()
    }
}

impl FireworksEmbedder {
    /// Create a new embedder with the given API key.
    ///
    /// Uses the default model (`nomic-ai/nomic-embed-text-v1.5`) and
    /// dimensions (768).
    ///
    /// # Errors
    ///
    /// Returns [`RagError::EmbeddingError`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(RagError::EmbeddingError {
                provider: "Fireworks".into(),
                message: "API key must not be empty".into(),
            });
        }
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_EMBEDDING_MODEL.into(),
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
        })
    }

    /// Create a new embedder using the `FIREWORKS_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = read_api_key_env().ok_or_else(|| RagError::EmbeddingError {
            provider: "Fireworks".into(),
            message: format!("{API_KEY_ENV} environment variable not set"),
        })?;
        Self::new(api_key)
    }

    /// Set the embedding model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the dimensionality reported for this model's embeddings.
    pub fn with_dimensions(mut self, dims: usize) -> Self {
        self.dimensions = dims;
        self
    }
}

#[async_trait]
impl Embedder for FireworksEmbedder {
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            provider = "Fireworks",
            batch_size = texts.len(),
            model = %self.model,
            "embedding batch"
        );

        let request_body = EmbeddingRequest { model: &self.model, input: texts.to_vec() };

        let response = self
            .client
            .post(FIREWORKS_EMBEDDINGS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Fireworks", error = %e, "embedding request failed");
                RagError::EmbeddingError {
                    provider: "Fireworks".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = error_detail(response.text().await.unwrap_or_default());
            error!(provider = "Fireworks", %status, "embedding API error");
            return Err(RagError::EmbeddingError {
                provider: "Fireworks".into(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        let embedding_response: EmbeddingResponse = response.json().await.map_err(|e| {
            error!(provider = "Fireworks", error = %e, "failed to parse embedding response");
            RagError::EmbeddingError {
                provider: "Fireworks".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        if embedding_response.data.len() != texts.len() {
            return Err(RagError::EmbeddingError {
                provider: "Fireworks".into(),
                message: format!(
                    "API returned {} embeddings for {} inputs",
                    embedding_response.data.len(),
                    texts.len()
                ),
            });
        }

        Ok(embedding_response.data.into_iter().map(|d| d.embedding).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_model_names_get_the_account_prefix() {
        assert_eq!(
            qualify_model("mistral-7b-instruct-4k"),
            "accounts/fireworks/models/mistral-7b-instruct-4k"
        );
    }

    #[test]
    fn qualified_model_names_pass_through() {
        assert_eq!(
            qualify_model("accounts/fireworks/models/llama-v2-7b"),
            "accounts/fireworks/models/llama-v2-7b"
        );
        assert_eq!(qualify_model("nomic-ai/nomic-embed-text-v1.5"), "nomic-ai/nomic-embed-text-v1.5");
    }

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(
            FireworksClient::new("").unwrap_err(),
            RagError::CompletionError { .. }
        ));
        assert!(matches!(
            FireworksEmbedder::new("").unwrap_err(),
            RagError::EmbeddingError { .. }
        ));
    }

    #[test]
    fn embedder_reports_default_dimensions() {
        let embedder = FireworksEmbedder::new("key").unwrap();
        assert_eq!(embedder.dimensions(), 768);
        let embedder = embedder.with_dimensions(1024);
        assert_eq!(embedder.dimensions(), 1024);
    }

    #[test]
    fn error_detail_prefers_structured_message() {
        let body = r#"{"error": {"message": "invalid api key"}}"#.to_string();
        assert_eq!(error_detail(body), "invalid api key");
        assert_eq!(error_detail("plain text".to_string()), "plain text");
    }
}
