//! Pluggable embedding backend trait and the built-in hashed backend.
//!
//! The ranker only needs one capability: turn a batch of strings into a
//! batch of fixed-dimension vectors, deterministically within a process
//! lifetime. Real model backends (ONNX sentence transformers, remote
//! embedding APIs) implement [`Embedder`]; [`HashEmbedder`] is the
//! zero-dependency in-process default.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::error::Result;

/// A pluggable text embedding backend.
///
/// Implementations must be deterministic for identical input text within
/// a process lifetime. They are **not** required to be reentrant: the
/// ranker serialises access behind a lock, so `encode` is never invoked
/// concurrently through the pipeline.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Encode a batch of texts into one vector per text, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Ranking`](crate::SearchError::Ranking) if the
    /// backend fails; the pipeline surfaces this as a failed search.
    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// The dimension of the vectors this backend produces.
    fn dimensions(&self) -> usize;
}

/// Default dimension for [`HashEmbedder`] vectors.
const DEFAULT_DIMENSIONS: usize = 256;

/// Deterministic hashed bag-of-words embedding backend.
///
/// Each lowercased alphanumeric token is hashed into one of `dimensions`
/// buckets with a sign derived from the hash, and the resulting vector is
/// L2-normalised. Texts sharing vocabulary produce similar vectors, which
/// is enough signal to order fetched pages against a query without any
/// model files. Empty text yields the zero vector and scores 0 against
/// every query.
pub struct HashEmbedder {
    dimensions: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl HashEmbedder {
    /// Create a hashed embedder with the default dimension.
    pub fn new() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
        }
    }

    /// Create a hashed embedder with a custom dimension.
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let h = hasher.finish();
            let index = (h % self.dimensions as u64) as usize;
            // Signed buckets keep unrelated vocabularies from all pointing
            // the same way.
            let sign = if h & (1 << 63) == 0 { 1.0 } else { -1.0 };
            vector[index] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        tracing::trace!(batch = texts.len(), "hash embedding batch");
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
