//! Multi-provider hit aggregation with first-seen-wins deduplication.
//!
//! Queries every provider concurrently, then merges their hit lists in
//! the fixed provider priority order. Duplicates are detected by exact
//! URL string equality: the first occurrence wins and later duplicates
//! from any provider are discarded. Hits without a URL are dropped.

use std::collections::HashSet;

use crate::provider::SearchProvider;
use crate::types::SearchHit;

/// Aggregate hits from all providers into one deduplicated sequence.
///
/// Providers are queried concurrently but merged in list order, so a
/// lower-priority provider's duplicate of an earlier URL is always the
/// one dropped. A provider that errors entirely is logged at warn level
/// and skipped — hits gathered from the other providers are still
/// returned, so a provider outage degrades results rather than failing
/// the query. The merged sequence is truncated to `max_results`.
pub async fn aggregate(
    providers: &[Box<dyn SearchProvider>],
    query: &str,
    max_results: usize,
) -> Vec<SearchHit> {
    let futures: Vec<_> = providers
        .iter()
        .map(|provider| async move {
            let outcome = provider.search(query, max_results).await;
            (provider.name().to_owned(), outcome)
        })
        .collect();

    let outcomes = futures::future::join_all(futures).await;

    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<SearchHit> = Vec::new();

    for (provider, outcome) in outcomes {
        match outcome {
            Ok(hits) => {
                tracing::debug!(provider, count = hits.len(), "provider returned hits");
                for hit in hits {
                    if merged.len() >= max_results {
                        break;
                    }
                    if hit.url.is_empty() {
                        continue;
                    }
                    if seen.insert(hit.url.clone()) {
                        merged.push(hit);
                    }
                }
            }
            Err(err) => {
                tracing::warn!(provider, error = %err, "provider query failed");
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, SearchError};
    use async_trait::async_trait;

    struct StaticProvider {
        name: &'static str,
        hits: Vec<SearchHit>,
        fail: bool,
    }

    impl StaticProvider {
        fn new(name: &'static str, urls: &[&str]) -> Box<dyn SearchProvider> {
            Box::new(Self {
                name,
                hits: urls
                    .iter()
                    .map(|url| SearchHit {
                        url: (*url).to_string(),
                        title: format!("Title for {url}"),
                        snippet: format!("Snippet for {url}"),
                    })
                    .collect(),
                fail: false,
            })
        }

        fn failing(name: &'static str) -> Box<dyn SearchProvider> {
            Box::new(Self {
                name,
                hits: vec![],
                fail: true,
            })
        }
    }

    #[async_trait]
    impl SearchProvider for StaticProvider {
        async fn search(&self, _query: &str, _max_results: usize) -> Result<Vec<SearchHit>> {
            if self.fail {
                return Err(SearchError::Provider(format!("{} is down", self.name)));
            }
            Ok(self.hits.clone())
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    #[tokio::test]
    async fn single_provider_passes_through_in_order() {
        let providers = vec![StaticProvider::new("A", &["https://a.com", "https://b.com"])];
        let hits = aggregate(&providers, "query", 10).await;
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://a.com");
        assert_eq!(hits[1].url, "https://b.com");
    }

    #[tokio::test]
    async fn duplicates_within_one_provider_dropped() {
        let providers = vec![StaticProvider::new(
            "A",
            &["https://a.com", "https://a.com", "https://b.com"],
        )];
        let hits = aggregate(&providers, "query", 10).await;
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://a.com");
        assert_eq!(hits[1].url, "https://b.com");
    }

    #[tokio::test]
    async fn duplicates_across_providers_first_seen_wins() {
        let providers = vec![
            StaticProvider::new("First", &["https://a.com", "https://b.com"]),
            StaticProvider::new("Second", &["https://b.com", "https://c.com"]),
        ];
        let hits = aggregate(&providers, "query", 10).await;
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].url, "https://a.com");
        assert_eq!(hits[1].url, "https://b.com");
        assert_eq!(hits[2].url, "https://c.com");
        // The kept b.com entry comes from the higher-priority provider.
        assert_eq!(hits[1].title, "Title for https://b.com");
    }

    #[tokio::test]
    async fn failing_provider_skipped_with_partial_results() {
        let providers = vec![
            StaticProvider::new("A", &["https://a.com"]),
            StaticProvider::failing("Broken"),
            StaticProvider::new("C", &["https://c.com"]),
        ];
        let hits = aggregate(&providers, "query", 10).await;
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://a.com");
        assert_eq!(hits[1].url, "https://c.com");
    }

    #[tokio::test]
    async fn all_providers_failing_yields_empty() {
        let providers = vec![
            StaticProvider::failing("A"),
            StaticProvider::failing("B"),
        ];
        let hits = aggregate(&providers, "query", 10).await;
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn hits_without_url_discarded() {
        let providers = vec![StaticProvider::new("A", &["", "https://a.com", ""])];
        let hits = aggregate(&providers, "query", 10).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "https://a.com");
    }

    #[tokio::test]
    async fn merged_sequence_truncated_to_max_results() {
        let providers = vec![
            StaticProvider::new("A", &["https://a.com", "https://b.com"]),
            StaticProvider::new("B", &["https://c.com", "https://d.com"]),
        ];
        let hits = aggregate(&providers, "query", 3).await;
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[2].url, "https://c.com");
    }

    #[tokio::test]
    async fn exact_string_equality_does_not_merge_near_duplicates() {
        // Dedup is by exact URL string: trailing slash or case differences
        // count as distinct URLs.
        let providers = vec![StaticProvider::new(
            "A",
            &["https://a.com/page", "https://a.com/page/", "https://A.com/page"],
        )];
        let hits = aggregate(&providers, "query", 10).await;
        assert_eq!(hits.len(), 3);
    }

    #[tokio::test]
    async fn no_providers_yields_empty() {
        let providers: Vec<Box<dyn SearchProvider>> = vec![];
        let hits = aggregate(&providers, "query", 10).await;
        assert!(hits.is_empty());
    }
}
