//! Relevance ranking by query-document cosine similarity.
//!
//! Computes one embedding for the query and a batched embedding pass over
//! all documents, scores each pair with cosine similarity, and sorts
//! descending. The sort is stable, so documents with exactly equal scores
//! keep their aggregation order and the output is reproducible.

use tokio::sync::Mutex;

use crate::embed::Embedder;
use crate::error::{Result, SearchError};
use crate::types::{Document, RankedResult};

/// Ranks documents against a query using a pluggable embedding backend.
///
/// The backend sits behind an async mutex: embedding backends are not
/// assumed reentrant, so concurrent queries take turns at the encode
/// step rather than corrupting backend state.
pub struct Ranker {
    embedder: Mutex<Box<dyn Embedder>>,
}

impl Ranker {
    /// Wrap an embedding backend for use by the pipeline.
    pub fn new(embedder: Box<dyn Embedder>) -> Self {
        Self {
            embedder: Mutex::new(embedder),
        }
    }

    /// Score and sort documents by relevance to `query`.
    ///
    /// Returns exactly one [`RankedResult`] per input document, sorted by
    /// descending cosine similarity with ties kept in input order.
    /// Empty-text documents are scored like any other (the zero vector
    /// gives them similarity 0), never dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Ranking`] if the embedding backend fails or
    /// returns a vector count that does not match its input.
    pub async fn rank(&self, query: &str, documents: Vec<Document>) -> Result<Vec<RankedResult>> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let texts: Vec<String> = documents.iter().map(|doc| doc.text.clone()).collect();

        // One lock span covers both encode calls so a query's embeddings
        // come from an undisturbed backend.
        let (query_vectors, doc_vectors) = {
            let embedder = self.embedder.lock().await;
            let query_vectors = embedder.encode(&[query.to_string()]).await?;
            let doc_vectors = embedder.encode(&texts).await?;
            (query_vectors, doc_vectors)
        };

        let query_vector = query_vectors.into_iter().next().ok_or_else(|| {
            SearchError::Ranking("embedding backend returned no query vector".into())
        })?;

        if doc_vectors.len() != documents.len() {
            return Err(SearchError::Ranking(format!(
                "embedding backend returned {} vectors for {} documents",
                doc_vectors.len(),
                documents.len()
            )));
        }

        let mut ranked: Vec<RankedResult> = documents
            .into_iter()
            .zip(doc_vectors)
            .map(|(doc, vector)| RankedResult {
                url: doc.url,
                text: doc.text,
                score: cosine_similarity(&query_vector, &vector),
            })
            .collect();

        // Vec::sort_by is stable: equal scores keep aggregation order.
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(count = ranked.len(), "documents ranked");
        Ok(ranked)
    }
}

/// Cosine similarity between two vectors, in `[-1.0, 1.0]`.
///
/// Mismatched lengths and zero vectors score 0.0 rather than erroring,
/// so degenerate documents rank at the bottom instead of failing a query.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a < f32::EPSILON || norm_b < f32::EPSILON {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
