//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls result counts, the per-request fetch deadline,
//! pagination, and cache capacity. The defaults match the behaviour of a
//! polite, low-volume meta-search deployment.

use crate::error::SearchError;

/// Configuration for a search pipeline.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of hits gathered per query after deduplication.
    /// Also part of the cache key, so different limits cache independently.
    pub max_results: usize,
    /// Per-request deadline in seconds for fetching a result page.
    /// A fetch that exceeds it resolves to empty text, never an error.
    pub fetch_timeout_secs: u64,
    /// Number of results per page when slicing a ranked set.
    pub page_size: usize,
    /// Maximum number of cached ranked result sets. The least-recently-used
    /// entry is evicted when the bound is exceeded.
    pub cache_capacity: usize,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 50,
            fetch_timeout_secs: 5,
            page_size: 10,
            cache_capacity: 50,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `fetch_timeout_secs` must be greater than 0
    /// - `page_size` must be greater than 0
    /// - `cache_capacity` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(SearchError::Config(
                "fetch_timeout_secs must be greater than 0".into(),
            ));
        }
        if self.page_size == 0 {
            return Err(SearchError::Config(
                "page_size must be greater than 0".into(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(SearchError::Config(
                "cache_capacity must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
