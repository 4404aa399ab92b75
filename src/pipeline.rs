//! Suggestion pipeline orchestrator.
//!
//! The [`SuggestionPipeline`] coordinates the full index-and-suggest
//! workflow by composing an [`Embedder`], a [`VectorStore`], a
//! [`PromptAssembler`], and a [`CompletionModel`].
//!
//! # Example
//!
//! ```rust,ignore
//! use movie_rag::{InMemoryVectorStore, PipelineConfig, SuggestionPipeline};
//!
//! let pipeline = SuggestionPipeline::builder()
//!     .config(PipelineConfig::default())
//!     .embedder(Arc::new(my_embedder))
//!     .vector_store(Arc::new(InMemoryVectorStore::new()))
//!     .completion_model(Arc::new(my_client))
//!     .build()?;
//!
//! pipeline.index(&records).await?;
//! let suggestions = pipeline.suggest_titles("Western romance").await?;
//! ```

use std::sync::Arc;

use tracing::info;

use crate::completion::{CompletionModel, CompletionParams};
use crate::config::PipelineConfig;
use crate::document::MovieRecord;
use crate::embedding::Embedder;
use crate::error::{RagError, Result};
use crate::indexer::{IndexSummary, Indexer};
use crate::prompt::PromptAssembler;
use crate::retriever::Retriever;
use crate::vectorstore::VectorStore;

/// The suggestion pipeline orchestrator.
///
/// Coordinates record indexing (placeholder-substitute → embed → store)
/// and query execution (embed → search → assemble prompt → complete).
/// Construct one via [`SuggestionPipeline::builder()`].
pub struct SuggestionPipeline {
    config: PipelineConfig,
    indexer: Indexer,
    retriever: Retriever,
    assembler: PromptAssembler,
    completion_model: Arc<dyn CompletionModel>,
}

impl std::fmt::Debug for SuggestionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SuggestionPipeline {
    /// Create a new [`SuggestionPipelineBuilder`].
    pub fn builder() -> SuggestionPipelineBuilder {
        SuggestionPipelineBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Index movie records into the vector store in batches.
    ///
    /// Every record produces two independently retrievable entries (its
    /// title and its plot) with freshly generated ids; see
    /// [`Indexer::index`] for the batching and failure behavior.
    pub async fn index(&self, records: &[MovieRecord]) -> Result<IndexSummary> {
        self.indexer.index(records).await
    }

    /// Answer a single query with suggested titles.
    ///
    /// Retrieves the configured `top_k` most similar stored documents,
    /// assembles the instruction prompt, and returns the raw completion
    /// text. The requested 5-title structure is an instruction to the
    /// model, not a guarantee; no post-processing or validation of the
    /// output format is performed.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidArgument`] for blank query text;
    /// embedding, store, and completion errors propagate unchanged.
    pub async fn suggest_titles(&self, query_text: &str) -> Result<String> {
        let retrieved = self.retriever.retrieve(query_text, self.config.top_k).await?;

        let prompt = self.assembler.assemble(query_text, &retrieved);

        let params = CompletionParams {
            model: self.config.completion_model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        let suggestions = self.completion_model.complete(&prompt, &params).await?;

        info!(
            retrieved = retrieved.len(),
            prompt_len = prompt.len(),
            completion_len = suggestions.len(),
            "generated title suggestions"
        );
        Ok(suggestions)
    }
}

/// Builder for constructing a [`SuggestionPipeline`].
///
/// The embedder, vector store, and completion model are required; the
/// config defaults to [`PipelineConfig::default()`]. Call
/// [`build()`](SuggestionPipelineBuilder::build) to validate and
/// produce the pipeline.
#[derive(Default)]
pub struct SuggestionPipelineBuilder {
    config: Option<PipelineConfig>,
    embedder: Option<Arc<dyn Embedder>>,
    vector_store: Option<Arc<dyn VectorStore>>,
    completion_model: Option<Arc<dyn CompletionModel>>,
}

impl SuggestionPipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding provider.
    pub fn embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Set the vector store backend.
    pub fn vector_store(mut self, store: Arc<dyn VectorStore>) -> Self {
        self.vector_store = Some(store);
        self
    }

    /// Set the completion model client.
    pub fn completion_model(mut self, model: Arc<dyn CompletionModel>) -> Self {
        self.completion_model = Some(model);
        self
    }

    /// Build the [`SuggestionPipeline`], validating that all required
    /// components are set.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::ConfigError`] if any required component is
    /// missing.
    pub fn build(self) -> Result<SuggestionPipeline> {
        let config = self.config.unwrap_or_default();
        let embedder = self
            .embedder
            .ok_or_else(|| RagError::ConfigError("embedder is required".to_string()))?;
        let vector_store = self
            .vector_store
            .ok_or_else(|| RagError::ConfigError("vector_store is required".to_string()))?;
        let completion_model = self
            .completion_model
            .ok_or_else(|| RagError::ConfigError("completion_model is required".to_string()))?;

        let indexer = Indexer::new(embedder.clone(), vector_store.clone(), config.batch_size)?;
        let retriever = Retriever::new(embedder, vector_store);

        Ok(SuggestionPipeline {
            config,
            indexer,
            retriever,
            assembler: PromptAssembler::new(),
            completion_model,
        })
    }
}
