//! In-memory vector store using cosine similarity.
//!
//! This module provides [`InMemoryVectorStore`], a zero-dependency vector
//! store backed by a `HashMap` protected by a `tokio::sync::RwLock`. It is
//! suitable for development, testing, and small-scale use cases.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{Document, SearchResult, SourceField};
use crate::error::{RagError, Result};
use crate::vectorstore::VectorStore;

/// An in-memory vector store using cosine similarity for search.
///
/// Entries are stored as a `HashMap` keyed by document id. All
/// operations are async-safe via `tokio::sync::RwLock`. Every entry in
/// the store carries an embedding of the same dimensionality; upserts
/// that would break that invariant are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use movie_rag::{InMemoryVectorStore, SourceField, VectorStore};
///
/// let store = InMemoryVectorStore::new();
/// store.upsert(&ids, &texts, &embeddings, SourceField::Title).await?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryVectorStore {
    entries: RwLock<HashMap<String, Document>>,
}

impl InMemoryVectorStore {
    /// Create a new empty in-memory vector store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude or the lengths differ.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn upsert(
        &self,
        ids: &[String],
        documents: &[String],
        embeddings: &[Vec<f32>],
        source_field: SourceField,
    ) -> Result<()> {
        if ids.len() != documents.len() || ids.len() != embeddings.len() {
            return Err(RagError::InvalidArgument(format!(
                "upsert slice lengths differ: {} ids, {} documents, {} embeddings",
                ids.len(),
                documents.len(),
                embeddings.len()
            )));
        }

        let mut entries = self.entries.write().await;

        // All embeddings in one store must share a dimensionality.
        let expected_dim = entries
            .values()
            .next()
            .map(|doc| doc.embedding.len())
            .or_else(|| embeddings.first().map(Vec::len));
        if let Some(dim) = expected_dim {
            if let Some(bad) = embeddings.iter().find(|e| e.len() != dim) {
                return Err(RagError::InvalidArgument(format!(
                    "embedding dimensionality {} does not match store dimensionality {dim}",
                    bad.len()
                )));
            }
        }
        if ids.iter().any(|id| id.is_empty()) {
            return Err(RagError::InvalidArgument("document id must not be empty".to_string()));
        }

        for ((id, text), embedding) in ids.iter().zip(documents).zip(embeddings) {
            entries.insert(
                id.clone(),
                Document {
                    id: id.clone(),
                    text: text.clone(),
                    embedding: embedding.clone(),
                    source_field,
                },
            );
        }
        Ok(())
    }

    async fn query(&self, query_embedding: &[f32], k: usize) -> Result<Vec<SearchResult>> {
        let entries = self.entries.read().await;

        let mut scored: Vec<SearchResult> = entries
            .values()
            .map(|doc| {
                let score = cosine_similarity(&doc.embedding, query_embedding);
                SearchResult { text: doc.text.clone(), score }
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        Ok(scored)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.entries.read().await.len())
    }
}
