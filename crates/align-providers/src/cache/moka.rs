//! Moka in-memory embedding cache
//!
//! Bounded, concurrent, optionally time-limited cache of embedding vectors
//! keyed by content hash.
//!
//! Concurrent misses on one key are coalesced by Moka's entry API: the first
//! caller runs its initialiser, the others wait for and receive that value.
//!
//! ## Example
//!
//! ```ignore
//! use align_providers::cache::MokaEmbeddingCache;
//! use std::time::Duration;
//!
//! let cache = MokaEmbeddingCache::with_config(10_000, Some(Duration::from_secs(3600)));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use align_application::ports::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};
use align_domain::ports::{CacheStats, EmbeddingCacheProvider};
use align_domain::value_objects::Embedding;
use async_trait::async_trait;
use futures::future::BoxFuture;
use moka::future::Cache;
use tracing::debug;

use crate::constants::CACHE_DEFAULT_MAX_ENTRIES;

/// Moka-based embedding cache
pub struct MokaEmbeddingCache {
    cache: Cache<String, Embedding>,
    max_entries: u64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for MokaEmbeddingCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaEmbeddingCache {
    /// Create a cache with the default capacity and no TTL
    pub fn new() -> Self {
        Self::with_config(CACHE_DEFAULT_MAX_ENTRIES, None)
    }

    /// Create a cache with the given capacity and optional TTL
    pub fn with_config(max_entries: u64, time_to_live: Option<Duration>) -> Self {
        let mut builder = Cache::builder().max_capacity(max_entries);
        if let Some(ttl) = time_to_live {
            builder = builder.time_to_live(ttl);
        }

        Self {
            cache: builder.build(),
            max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Maximum number of cached vectors
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }

    fn record(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

#[async_trait]
impl EmbeddingCacheProvider for MokaEmbeddingCache {
    async fn get(&self, key: &str) -> Option<Embedding> {
        let value = self.cache.get(key).await;
        self.record(value.is_some());
        value
    }

    async fn get_or_insert_with(&self, key: &str, init: BoxFuture<'_, Embedding>) -> Embedding {
        let entry = self.cache.entry_by_ref(key).or_insert_with(init).await;
        let hit = !entry.is_fresh();
        self.record(hit);
        if hit {
            debug!(key = %key, "embedding cache hit");
        }
        entry.into_value()
    }

    async fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }

    async fn stats(&self) -> CacheStats {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;

        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
            hit_rate: 0.0,
        };
        stats.hit_rate = stats.calculate_hit_rate();
        stats
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaEmbeddingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaEmbeddingCache")
            .field("max_entries", &self.max_entries)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn moka_factory(
    config: &CacheProviderConfig,
) -> Result<Arc<dyn EmbeddingCacheProvider>, String> {
    let max_entries = config.max_entries.unwrap_or(CACHE_DEFAULT_MAX_ENTRIES);
    if max_entries == 0 {
        return Err("moka cache requires max_entries > 0".to_string());
    }
    let ttl = config
        .ttl_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    Ok(Arc::new(MokaEmbeddingCache::with_config(max_entries, ttl)))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static MOKA_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "moka",
    description: "Moka bounded in-memory embedding cache",
    factory: moka_factory,
};
