//! Property tests for in-memory vector store search ordering.

use std::collections::HashMap;

use movie_rag::document::SourceField;
use movie_rag::inmemory::InMemoryVectorStore;
use movie_rag::vectorstore::VectorStore;
use proptest::prelude::*;

/// Generate a non-zero L2-normalized embedding of the given dimension.
fn arb_normalized_embedding(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, dim).prop_filter_map(
        "non-zero embedding",
        |mut v| {
            let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm < 1e-8 {
                return None;
            }
            for val in &mut v {
                *val /= norm;
            }
            Some(v)
        },
    )
}

/// Generate an (id, text, embedding) entry with a normalized embedding.
fn arb_entry(dim: usize) -> impl Strategy<Value = (String, String, Vec<f32>)> {
    ("[a-z]{3,8}", "[a-z ]{5,30}", arb_normalized_embedding(dim))
}

/// For any set of entries in an `InMemoryVectorStore`, querying with an
/// embedding returns results ordered by descending cosine similarity,
/// bounded above by both `k` and the number of stored entries.
mod prop_inmemory_query_ordering {
    use super::*;

    const DIM: usize = 16;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn results_ordered_descending_and_bounded_by_k(
            entries in proptest::collection::vec(arb_entry(DIM), 1..20),
            query in arb_normalized_embedding(DIM),
            k in 1usize..25,
        ) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let (results, unique_count) = rt.block_on(async {
                let store = InMemoryVectorStore::new();

                // Deduplicate entries by id to avoid upsert overwriting
                let mut deduped: HashMap<String, (String, Vec<f32>)> = HashMap::new();
                for (id, text, embedding) in &entries {
                    deduped
                        .entry(id.clone())
                        .or_insert_with(|| (text.clone(), embedding.clone()));
                }
                let ids: Vec<String> = deduped.keys().cloned().collect();
                let texts: Vec<String> =
                    ids.iter().map(|id| deduped[id].0.clone()).collect();
                let embeddings: Vec<Vec<f32>> =
                    ids.iter().map(|id| deduped[id].1.clone()).collect();
                let count = ids.len();

                store.upsert(&ids, &texts, &embeddings, SourceField::Title).await.unwrap();
                let results = store.query(&query, k).await.unwrap();
                (results, count)
            });

            // Result count is at most k and at most the number of stored entries
            prop_assert!(results.len() <= k);
            prop_assert!(results.len() <= unique_count);

            // Fewer than k results only when the store holds fewer than k entries
            if unique_count >= k {
                prop_assert_eq!(results.len(), k);
            } else {
                prop_assert_eq!(results.len(), unique_count);
            }

            // Results are ordered by descending score
            for window in results.windows(2) {
                prop_assert!(
                    window[0].score >= window[1].score,
                    "results not in descending order: {} < {}",
                    window[0].score,
                    window[1].score,
                );
            }
        }
    }
}
