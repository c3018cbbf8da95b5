//! Bounded in-memory cache for ranked result sets.
//!
//! Memoises the final ranked list per `(normalised query, max_results)`
//! key in a strict least-recently-used store with a fixed capacity, so a
//! long-running service cannot grow without bound. Concurrent lookups of
//! the same missing key coalesce onto a single in-flight computation;
//! distinct keys compute independently.

use std::collections::HashMap;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tokio::sync::{Mutex, OnceCell};

use crate::error::{Result, SearchError};
use crate::types::RankedResult;

/// Composite cache key: normalised query + requested result count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Lowercased, trimmed query string.
    query: String,
    /// Requested result count — different limits cache independently.
    max_results: usize,
}

impl CacheKey {
    /// Build a deterministic cache key from a query and result limit.
    ///
    /// The query is lowercased and trimmed so that trivially different
    /// spellings of the same query share an entry.
    pub fn new(query: &str, max_results: usize) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            max_results,
        }
    }
}

type ResultSet = Arc<Vec<RankedResult>>;

/// Bounded LRU store for ranked result sets.
///
/// All mutation (insertion, eviction, recency updates) is serialised
/// behind an async mutex; entries are immutable `Arc`s once inserted, so
/// hits hand out cheap clones.
pub struct SearchCache {
    store: Mutex<LruCache<CacheKey, ResultSet>>,
    /// In-flight computations, keyed like the store. A cell lives here
    /// only while its computation runs.
    pending: Mutex<HashMap<CacheKey, Arc<OnceCell<ResultSet>>>>,
}

impl SearchCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Mutex::new(LruCache::new(capacity)),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached result set for `key`, or compute and store it.
    ///
    /// On a hit the stored set is returned without invoking `compute`,
    /// and the entry becomes the most recently used. On a miss, callers
    /// racing on the same key share one `compute` invocation; the result
    /// is inserted, evicting the least-recently-used entry if the cache
    /// is full. A failed computation is not cached — the next caller
    /// computes again.
    pub async fn get_or_compute<F, Fut>(&self, key: CacheKey, compute: F) -> Result<ResultSet>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<RankedResult>>>,
    {
        if let Some(value) = self.store.lock().await.get(&key) {
            tracing::trace!(query = %key.query, "cache hit");
            return Ok(Arc::clone(value));
        }

        let cell = {
            let mut pending = self.pending.lock().await;
            Arc::clone(pending.entry(key.clone()).or_default())
        };

        let outcome = cell
            .get_or_try_init(|| async {
                let value = Arc::new(compute().await?);
                let mut store = self.store.lock().await;
                if let Some((evicted, _)) = store.push(key.clone(), Arc::clone(&value)) {
                    if evicted != key {
                        tracing::debug!(query = %evicted.query, "evicted least-recently-used entry");
                    }
                }
                Ok::<_, SearchError>(value)
            })
            .await
            .map(Arc::clone);

        self.pending.lock().await.remove(&key);
        outcome
    }

    /// Number of resident entries.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// True when no entries are resident.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Whether `key` is resident, without touching its recency.
    pub async fn contains(&self, key: &CacheKey) -> bool {
        self.store.lock().await.peek(key).is_some()
    }
}
