//! Completion model trait for hosted text generation.

use async_trait::async_trait;

use crate::error::Result;

/// Generation parameters for a single completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    /// Model identifier understood by the backend.
    pub model: String,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

/// A hosted text-completion model.
///
/// Implementations wrap a remote inference API behind a single blocking
/// async call: one prompt in, generated text out, truncated at the
/// configured token budget. No retry or backoff is performed here;
/// callers needing resilience wrap the client themselves.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Generate a completion for `prompt` with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::CompletionError`](crate::RagError::CompletionError)
    /// on network, authentication, or rate-limit failure.
    async fn complete(&self, prompt: &str, params: &CompletionParams) -> Result<String>;
}
