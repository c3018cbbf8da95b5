//! # semsearch
//!
//! Semantic meta-search pipeline: aggregate hits from one or more search
//! providers, fetch the linked pages concurrently under per-request
//! deadlines, extract readable paragraph text, rank the combined set by
//! embedding similarity to the query, and serve repeat queries from a
//! bounded in-memory cache.
//!
//! ## Design
//!
//! - Providers are pluggable ([`SearchProvider`]); the stock setup scrapes
//!   DuckDuckGo's HTML endpoint. A provider outage degrades results, it
//!   never fails a query.
//! - Hits are deduplicated by exact URL, first occurrence wins, and every
//!   hit becomes exactly one ranked result — a failed page fetch falls
//!   back to the provider snippet rather than dropping the hit.
//! - Ranking is cosine similarity over a pluggable embedding backend
//!   ([`Embedder`]), batched per query, with a stable descending sort.
//! - The final ranked set is cached per `(query, max_results)` in a
//!   strict LRU store with a fixed capacity; concurrent identical queries
//!   share one pipeline run.
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners — this is a library, not a server
//! - Search queries are logged only at trace level
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> semsearch::Result<()> {
//! let pipeline = semsearch::Pipeline::with_defaults(semsearch::SearchConfig::default())?;
//! let page = pipeline.search_page("rust ownership", 1).await?;
//! for result in &page.results {
//!     println!("{:.3}  {}", result.score, result.url);
//! }
//! println!("page {} of {}", page.page, page.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod embed;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod paginate;
pub mod pipeline;
pub mod provider;
pub mod providers;
pub mod rank;
pub mod types;

pub use config::SearchConfig;
pub use embed::{Embedder, HashEmbedder};
pub use error::{Result, SearchError};
pub use pipeline::Pipeline;
pub use provider::SearchProvider;
pub use types::{Document, RankedResult, SearchHit, SearchPage};

use std::sync::Arc;

/// Process-wide default pipeline, lazily built on first use so repeat
/// [`search`] calls share one cache.
static DEFAULT_PIPELINE: tokio::sync::OnceCell<Pipeline> = tokio::sync::OnceCell::const_new();

/// Search the web with the stock pipeline and default configuration.
///
/// Convenience wrapper for callers that do not need custom providers or
/// backends. The underlying pipeline (and its result cache) is shared
/// process-wide.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the pipeline cannot be constructed on
/// first use, or [`SearchError::Ranking`] if the embedding backend fails.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> semsearch::Result<()> {
/// let results = semsearch::search("rust ownership").await?;
/// for result in results.iter().take(10) {
///     println!("{:.3}  {}", result.score, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str) -> Result<Arc<Vec<RankedResult>>> {
    let pipeline = DEFAULT_PIPELINE
        .get_or_try_init(|| async { Pipeline::with_defaults(SearchConfig::default()) })
        .await?;
    pipeline.search(query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[tokio::test]
    async fn top_level_search_short_circuits_empty_query() {
        let results = search("").await.expect("empty query should succeed");
        assert!(results.is_empty());
    }
}
