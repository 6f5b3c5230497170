//! TTL cache for fetched result batches
//!
//! Each (result type, query, page) key maps to the batch fetched for it.
//! Entries older than the TTL behave as absent; a new fetch for the same key
//! overwrites rather than merges. Instances are constructed explicitly and
//! injected, so tests get isolated stores.

use crate::results::{ResultType, SearchResponse};
use moka::future::Cache;
use std::time::Duration;

/// Cache for search result batches
#[derive(Clone)]
pub struct ResultCache {
    cache: Cache<String, SearchResponse>,
}

impl ResultCache {
    /// Create a new result cache with the specified TTL
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder().time_to_live(ttl).build();

        Self { cache }
    }

    /// Get a cached batch, if present and fresh
    pub async fn get(&self, key: &str) -> Option<SearchResponse> {
        self.cache.get(key).await
    }

    /// Store a batch, unconditionally overwriting any prior entry
    pub async fn put(&self, key: String, batch: SearchResponse) {
        self.cache.insert(key, batch).await;
    }

    /// Number of live entries
    pub fn size(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(crate::DEFAULT_CACHE_TTL_SECS))
    }
}

/// Generate the cache key for one fetch
pub fn query_cache_key(result_type: &ResultType, query: &str, page: u32) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(result_type.as_str().as_bytes());
    hasher.update([0]);
    hasher.update(query.as_bytes());
    hasher.update([0]);
    hasher.update(page.to_string().as_bytes());

    format!("{:x}", hasher.finalize())
}
