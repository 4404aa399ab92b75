//! Embedder trait for generating vector embeddings from text.

use async_trait::async_trait;

use crate::error::{RagError, Result};

/// A provider that generates vector embeddings from text input.
///
/// Implementations wrap specific embedding backends behind a unified
/// async interface. Embeddings are deterministic for a fixed model and
/// input, and every vector has the dimensionality reported by
/// [`dimensions()`](Embedder::dimensions).
///
/// # Example
///
/// ```rust,ignore
/// use movie_rag::Embedder;
///
/// let embedder = MyEmbedder::new();
/// let embedding = embedder.embed("hello world").await?;
/// assert_eq!(embedding.len(), embedder.dimensions());
/// ```
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate embedding vectors for a batch of text inputs.
    ///
    /// Returns one vector per input in input order. A backend failure
    /// surfaces as an error for the whole batch; there are no partial
    /// results.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Generate an embedding vector for a single text input.
    ///
    /// The default implementation delegates to a batch of one.
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut results = self.embed_batch(&[text]).await?;
        results.pop().ok_or_else(|| RagError::EmbeddingError {
            provider: "embedder".to_string(),
            message: "backend returned no embedding for a single-text batch".to_string(),
        })
    }

    /// Return the dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}
