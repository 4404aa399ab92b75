//! Batched loading of movie records into a vector store.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::document::{MovieRecord, SourceField};
use crate::embedding::Embedder;
use crate::error::{RagError, Result};
use crate::vectorstore::VectorStore;

/// Counts reported after an indexing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexSummary {
    /// Number of input records processed.
    pub records: usize,
    /// Number of batches embedded and upserted.
    pub batches: usize,
    /// Number of store entries written (two per record).
    pub entries: usize,
}

/// Loads (title, plot) records into a [`VectorStore`] in bounded-size
/// batches.
///
/// Each batch makes a single [`Embedder::embed_batch`] call over all of
/// its titles followed by all of its plots, splits the returned vectors
/// back by position, and upserts titles and plots separately. Every
/// entry gets a fresh UUID, so indexing the same dataset again adds new
/// entries rather than replacing the old ones.
///
/// Batches are independent: a failure aborts the current batch and
/// propagates, while entries from earlier batches stay committed.
pub struct Indexer {
    embedder: Arc<dyn Embedder>,
    store: Arc<dyn VectorStore>,
    batch_size: usize,
}

impl Indexer {
    /// Create a new indexer writing batches of `batch_size` records.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidArgument`] if `batch_size` is zero.
    pub fn new(
        embedder: Arc<dyn Embedder>,
        store: Arc<dyn VectorStore>,
        batch_size: usize,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(RagError::InvalidArgument(
                "batch_size must be greater than zero".to_string(),
            ));
        }
        Ok(Self { embedder, store, batch_size })
    }

    /// Embed and upsert every record, two entries per record.
    ///
    /// Missing or blank titles and plots are replaced by the
    /// [`NO_TITLE`](crate::document::NO_TITLE) and
    /// [`NO_PLOT`](crate::document::NO_PLOT) placeholders before
    /// embedding, so the store never holds empty text.
    ///
    /// # Errors
    ///
    /// Propagates embedding and store errors unchanged. Batches
    /// committed before the failure remain in the store.
    pub async fn index(&self, records: &[MovieRecord]) -> Result<IndexSummary> {
        let mut summary = IndexSummary::default();

        for (batch_index, batch) in records.chunks(self.batch_size).enumerate() {
            let titles: Vec<String> = batch.iter().map(MovieRecord::title_or_placeholder).collect();
            let plots: Vec<String> = batch.iter().map(MovieRecord::plot_or_placeholder).collect();

            // One embedding call per batch: all titles, then all plots.
            let texts: Vec<&str> =
                titles.iter().chain(plots.iter()).map(String::as_str).collect();
            let embeddings = self.embedder.embed_batch(&texts).await?;
            if embeddings.len() != texts.len() {
                return Err(RagError::EmbeddingError {
                    provider: "embedder".to_string(),
                    message: format!(
                        "backend returned {} embeddings for {} inputs",
                        embeddings.len(),
                        texts.len()
                    ),
                });
            }
            let (title_embeddings, plot_embeddings) = embeddings.split_at(batch.len());

            let title_ids: Vec<String> =
                (0..batch.len()).map(|_| Uuid::new_v4().to_string()).collect();
            let plot_ids: Vec<String> =
                (0..batch.len()).map(|_| Uuid::new_v4().to_string()).collect();

            self.store
                .upsert(&title_ids, &titles, title_embeddings, SourceField::Title)
                .await?;
            self.store.upsert(&plot_ids, &plots, plot_embeddings, SourceField::Plot).await?;

            summary.records += batch.len();
            summary.batches += 1;
            summary.entries += 2 * batch.len();

            info!(
                batch = batch_index + 1,
                batch_records = batch.len(),
                entries = summary.entries,
                "indexed batch"
            );
        }

        info!(
            records = summary.records,
            batches = summary.batches,
            entries = summary.entries,
            "indexing complete"
        );
        Ok(summary)
    }
}
