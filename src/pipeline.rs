//! The search pipeline: aggregate → fetch → rank, wrapped by the cache.
//!
//! [`Pipeline`] owns the providers, the embedding backend, the shared
//! HTTP client, and the bounded result cache. One `search` call runs the
//! whole enrichment pipeline for a query, or serves the ranked set from
//! cache when the same query was answered recently.

use std::sync::Arc;
use std::time::Duration;

use crate::aggregate::aggregate;
use crate::cache::{CacheKey, SearchCache};
use crate::config::SearchConfig;
use crate::embed::{Embedder, HashEmbedder};
use crate::error::Result;
use crate::fetch;
use crate::http;
use crate::paginate;
use crate::provider::SearchProvider;
use crate::providers::DuckDuckGoProvider;
use crate::rank::Ranker;
use crate::types::{Document, RankedResult, SearchPage};

/// A configured search pipeline.
///
/// Providers are queried in the order given at construction; the first
/// provider has dedup priority. The cache is scoped to the pipeline
/// instance and holds at most `config.cache_capacity` ranked sets.
pub struct Pipeline {
    providers: Vec<Box<dyn SearchProvider>>,
    ranker: Ranker,
    cache: SearchCache,
    client: reqwest::Client,
    config: SearchConfig,
}

impl Pipeline {
    /// Build a pipeline from explicit providers and an embedding backend.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`](crate::SearchError::Config) if the
    /// configuration is invalid, or
    /// [`SearchError::Http`](crate::SearchError::Http) if the shared HTTP
    /// client cannot be constructed.
    pub fn new(
        config: SearchConfig,
        providers: Vec<Box<dyn SearchProvider>>,
        embedder: Box<dyn Embedder>,
    ) -> Result<Self> {
        config.validate()?;
        let client = http::build_client(&config)?;
        let cache = SearchCache::new(config.cache_capacity);
        Ok(Self {
            providers,
            ranker: Ranker::new(embedder),
            cache,
            client,
            config,
        })
    }

    /// Build a pipeline with the stock setup: the DuckDuckGo provider and
    /// the hashed embedding backend.
    ///
    /// # Errors
    ///
    /// Same as [`Pipeline::new`].
    pub fn with_defaults(config: SearchConfig) -> Result<Self> {
        let providers: Vec<Box<dyn SearchProvider>> =
            vec![Box::new(DuckDuckGoProvider::new(&config)?)];
        Self::new(config, providers, Box::new(HashEmbedder::new()))
    }

    /// Run a search, serving repeat queries from the bounded cache.
    ///
    /// An empty or whitespace-only query short-circuits to an empty
    /// result set without touching providers, the network, or the
    /// ranking backend.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Ranking`](crate::SearchError::Ranking) if
    /// the embedding backend fails — provider and per-page fetch failures
    /// are recovered inside the pipeline and never surface here.
    pub async fn search(&self, query: &str) -> Result<Arc<Vec<RankedResult>>> {
        if query.trim().is_empty() {
            return Ok(Arc::new(Vec::new()));
        }

        let key = CacheKey::new(query, self.config.max_results);
        self.cache.get_or_compute(key, || self.run(query)).await
    }

    /// Run a search and slice the ranked set into one page for rendering.
    ///
    /// # Errors
    ///
    /// Same as [`Pipeline::search`].
    pub async fn search_page(&self, query: &str, page_number: usize) -> Result<SearchPage> {
        let ranked = self.search(query).await?;
        let (results, total_pages) = paginate::page(&ranked, page_number, self.config.page_size);
        Ok(SearchPage {
            query: query.to_string(),
            results,
            page: page_number.max(1),
            total_pages,
        })
    }

    /// The uncached pipeline: aggregate hits, enrich them into documents,
    /// and rank. Every aggregated hit yields exactly one ranked result.
    async fn run(&self, query: &str) -> Result<Vec<RankedResult>> {
        let hits = aggregate(&self.providers, query, self.config.max_results).await;
        tracing::debug!(count = hits.len(), "hits aggregated");

        let urls: Vec<String> = hits.iter().map(|hit| hit.url.clone()).collect();
        let timeout = Duration::from_secs(self.config.fetch_timeout_secs);
        let texts = fetch::fetch_all(&self.client, &urls, timeout).await;

        // Zip is safe: fetch_all output matches input length and order.
        let documents: Vec<Document> = hits
            .into_iter()
            .zip(texts)
            .map(|(hit, text)| Document {
                url: hit.url,
                text: if text.is_empty() { hit.snippet } else { text },
            })
            .collect();

        self.ranker.rank(query, documents).await
    }
}
