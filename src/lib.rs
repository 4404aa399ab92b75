//! # movie-rag
//!
//! Retrieval-augmented movie title suggestion: embed (title, plot)
//! records into a vector store, retrieve the entries most similar to a
//! free-text query, and prompt a hosted completion model to generate
//! five suggested titles in a similar style.
//!
//! ## Components
//!
//! - [`Embedder`] — async trait turning text batches into fixed-length
//!   vectors; implemented by [`FireworksEmbedder`].
//! - [`VectorStore`] — async trait over (id, text, embedding) entries
//!   with similarity search; implemented by [`InMemoryVectorStore`].
//! - [`Indexer`] — batched embed-and-upsert of [`MovieRecord`]s, two
//!   entries per record (title and plot).
//! - [`Retriever`] — query embedding plus top-k store lookup.
//! - [`PromptAssembler`] — `[INST] … [/INST]` instruction template for
//!   Mistral-instruct family models.
//! - [`CompletionModel`] — async trait over hosted text completion;
//!   implemented by [`FireworksClient`].
//! - [`SuggestionPipeline`] — orchestrates retrieve → assemble →
//!   complete for a single query.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use movie_rag::{
//!     FireworksClient, FireworksEmbedder, InMemoryVectorStore, MovieRecord,
//!     SuggestionPipeline,
//! };
//!
//! #[tokio::main]
//! async fn main() -> movie_rag::Result<()> {
//!     let pipeline = SuggestionPipeline::builder()
//!         .embedder(Arc::new(FireworksEmbedder::from_env()?))
//!         .vector_store(Arc::new(InMemoryVectorStore::new()))
//!         .completion_model(Arc::new(FireworksClient::from_env()?))
//!         .build()?;
//!
//!     let records = vec![MovieRecord::new(
//!         "The Great Escape",
//!         "POWs tunnel out of a camp.",
//!     )];
//!     pipeline.index(&records).await?;
//!
//!     let suggestions = pipeline.suggest_titles("prison escape").await?;
//!     println!("{suggestions}");
//!     Ok(())
//! }
//! ```

pub mod completion;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod fireworks;
pub mod indexer;
pub mod inmemory;
pub mod pipeline;
pub mod prompt;
pub mod retriever;
pub mod vectorstore;

pub use completion::{CompletionModel, CompletionParams};
pub use config::{PipelineConfig, PipelineConfigBuilder, DEFAULT_COMPLETION_MODEL};
pub use document::{Document, MovieRecord, SearchResult, SourceField, NO_PLOT, NO_TITLE};
pub use embedding::Embedder;
pub use error::{RagError, Result};
pub use fireworks::{FireworksClient, FireworksEmbedder};
pub use indexer::{IndexSummary, Indexer};
pub use inmemory::InMemoryVectorStore;
pub use pipeline::{SuggestionPipeline, SuggestionPipelineBuilder};
pub use prompt::{PromptAssembler, INST_CLOSE, INST_OPEN};
pub use retriever::Retriever;
pub use vectorstore::VectorStore;
