//! Configuration for the suggestion pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{RagError, Result};

/// Default model for title suggestions (Fireworks short name).
pub const DEFAULT_COMPLETION_MODEL: &str = "mistral-7b-instruct-4k";

/// Configuration parameters for the suggestion pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Number of records embedded and upserted per indexing batch.
    pub batch_size: usize,
    /// Number of top results to retrieve from vector search.
    pub top_k: usize,
    /// Completion model identifier.
    pub completion_model: String,
    /// Token budget for each completion call.
    pub max_tokens: u32,
    /// Sampling temperature for completions.
    pub temperature: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: 50,
            top_k: 10,
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            max_tokens: 2000,
            temperature: 0.0,
        }
    }
}

impl PipelineConfig {
    /// Create a new builder for constructing a [`PipelineConfig`].
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`PipelineConfig`].
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Set the number of records per indexing batch.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    /// Set the number of top results to retrieve from vector search.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Set the completion model identifier.
    pub fn completion_model(mut self, model: impl Into<String>) -> Self {
        self.config.completion_model = model.into();
        self
    }

    /// Set the token budget for completion calls.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.config.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature for completion calls.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = temperature;
        self
    }

    /// Build the [`PipelineConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::ConfigError`] if:
    /// - `batch_size == 0`
    /// - `top_k == 0`
    /// - `max_tokens == 0`
    /// - `completion_model` is empty
    /// - `temperature` is negative or not finite
    pub fn build(self) -> Result<PipelineConfig> {
        if self.config.batch_size == 0 {
            return Err(RagError::ConfigError("batch_size must be greater than zero".to_string()));
        }
        if self.config.top_k == 0 {
            return Err(RagError::ConfigError("top_k must be greater than zero".to_string()));
        }
        if self.config.max_tokens == 0 {
            return Err(RagError::ConfigError("max_tokens must be greater than zero".to_string()));
        }
        if self.config.completion_model.is_empty() {
            return Err(RagError::ConfigError("completion_model must not be empty".to_string()));
        }
        if !self.config.temperature.is_finite() || self.config.temperature < 0.0 {
            return Err(RagError::ConfigError(format!(
                "temperature must be a non-negative finite number, got {}",
                self.config.temperature
            )));
        }
        Ok(self.config)
    }
}
