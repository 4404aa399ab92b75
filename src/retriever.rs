//! Similarity retrieval of stored documents for a free-text query.

use std::sync::Arc;

use tracing::debug;

use crate::embedding::Embedder;
use crate::error::{RagError, Result};
use crate::vectorstore::VectorStore;

/// Embeds a query and returns the most similar stored documents.
///
/// Results are document texts ranked by descending similarity. No
/// caching and no deduplication: textually identical entries come back
/// as-is.
pub struct Retriever {
    embedder: Arc<dyn Embedder>,
    store: Arc<dyn VectorStore>,
}

impl Retriever {
    /// Create a new retriever over the given embedder and store.
    pub fn new(embedder: Arc<dyn Embedder>, store: Arc<dyn VectorStore>) -> Self {
        Self { embedder, store }
    }

    /// Return up to `k` stored documents most similar to `query_text`.
    ///
    /// Fewer than `k` documents are returned only when the store holds
    /// fewer than `k` entries.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidArgument`] for blank query text or
    /// `k == 0`; embedding and store errors propagate unchanged.
    pub async fn retrieve(&self, query_text: &str, k: usize) -> Result<Vec<String>> {
        if query_text.trim().is_empty() {
            return Err(RagError::InvalidArgument("query text must not be empty".to_string()));
        }
        if k == 0 {
            return Err(RagError::InvalidArgument("k must be greater than zero".to_string()));
        }

        let query_embedding = self.embedder.embed(query_text).await?;
        let results = self.store.query(&query_embedding, k).await?;

        debug!(k, result_count = results.len(), "retrieved documents");
        Ok(results.into_iter().map(|r| r.text).collect())
    }
}
