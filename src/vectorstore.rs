//! Vector store trait for storing and searching vector embeddings.

use async_trait::async_trait;

use crate::document::{SearchResult, SourceField};
use crate::error::Result;

/// A storage backend for (id, text, embedding) entries with
/// similarity search.
///
/// Entries are keyed by id: upserting an existing id replaces the
/// entry. The similarity metric and tie-breaking among equal scores
/// are backend-internal.
///
/// # Example
///
/// ```rust,ignore
/// use movie_rag::{InMemoryVectorStore, SourceField, VectorStore};
///
/// let store = InMemoryVectorStore::new();
/// store.upsert(&ids, &texts, &embeddings, SourceField::Title).await?;
/// let results = store.query(&query_embedding, 5).await?;
/// ```
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert or replace entries keyed by id.
    ///
    /// The three slices are positionally aligned and must have equal
    /// lengths; a mismatch is rejected with
    /// [`RagError::InvalidArgument`](crate::RagError::InvalidArgument)
    /// before any entry is written.
    async fn upsert(
        &self,
        ids: &[String],
        documents: &[String],
        embeddings: &[Vec<f32>],
        source_field: SourceField,
    ) -> Result<()>;

    /// Return up to `k` entries ranked by similarity to
    /// `query_embedding`, highest first.
    ///
    /// Returns every entry when the store holds fewer than `k`, and an
    /// empty vec when the store is empty.
    async fn query(&self, query_embedding: &[f32], k: usize) -> Result<Vec<SearchResult>>;

    /// Number of entries currently in the store.
    async fn count(&self) -> Result<usize>;
}
