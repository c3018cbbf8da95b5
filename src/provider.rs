//! Trait definition for pluggable search providers.
//!
//! A provider turns a query into raw [`SearchHit`]s — a scraped search
//! engine, a paid search API, or a deterministic fake in tests. Providers
//! are queried in a fixed priority order by the aggregator, which merges
//! and deduplicates their hits.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::SearchHit;

/// A pluggable source of raw search hits.
///
/// Implementors handle their own query encoding, HTTP requests, and
/// response parsing. Providers are treated as untrusted and unreliable:
/// a provider that errors is skipped by the aggregator, and hits it
/// returns are deduplicated against higher-priority providers.
///
/// All implementations must be `Send + Sync` for concurrent querying.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform a search and return raw hits in provider relevance order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Provider`](crate::SearchError::Provider) if
    /// the provider cannot be reached or its response cannot be parsed.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>>;

    /// A short human-readable name for logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    /// A fixed-hit provider for testing trait bounds and async execution.
    struct FixedProvider {
        hits: Vec<SearchHit>,
    }

    #[async_trait]
    impl SearchProvider for FixedProvider {
        async fn search(&self, _query: &str, _max_results: usize) -> Result<Vec<SearchHit>> {
            if self.hits.is_empty() {
                return Err(SearchError::Provider("fixed provider failure".into()));
            }
            Ok(self.hits.clone())
        }

        fn name(&self) -> &str {
            "Fixed"
        }
    }

    #[test]
    fn provider_is_object_safe() {
        fn assert_dyn(_: &dyn SearchProvider) {}
        let provider = FixedProvider { hits: vec![] };
        assert_dyn(&provider);
    }

    #[tokio::test]
    async fn fixed_provider_returns_hits() {
        let provider = FixedProvider {
            hits: vec![SearchHit {
                url: "https://test.com".into(),
                title: "Test".into(),
                snippet: "A test hit".into(),
            }],
        };
        let hits = provider.search("test", 10).await.expect("should succeed");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "https://test.com");
    }

    #[tokio::test]
    async fn fixed_provider_propagates_errors() {
        let provider = FixedProvider { hits: vec![] };
        let result = provider.search("test", 10).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("fixed provider failure"));
    }
}
