//! Null embedding cache
//!
//! Stores nothing: every lookup misses and every `get_or_insert_with` runs its
//! initialiser. Used when caching is disabled and in tests that need to see
//! every provider call.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use align_application::ports::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};
use align_domain::ports::{CacheStats, EmbeddingCacheProvider};
use align_domain::value_objects::Embedding;
use async_trait::async_trait;
use futures::future::BoxFuture;

/// Cache that never stores anything
///
/// # Example
///
/// ```rust
/// use align_providers::cache::NullEmbeddingCache;
///
/// let cache = NullEmbeddingCache::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Default)]
pub struct NullEmbeddingCache {
    misses: AtomicU64,
}

impl NullEmbeddingCache {
    /// Create a new null cache
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmbeddingCacheProvider for NullEmbeddingCache {
    async fn get(&self, _key: &str) -> Option<Embedding> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    async fn get_or_insert_with(&self, _key: &str, init: BoxFuture<'_, Embedding>) -> Embedding {
        self.misses.fetch_add(1, Ordering::Relaxed);
        init.await
    }

    async fn clear(&self) {}

    async fn stats(&self) -> CacheStats {
        CacheStats {
            misses: self.misses.load(Ordering::Relaxed),
            ..CacheStats::default()
        }
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

fn null_factory(_config: &CacheProviderConfig) -> Result<Arc<dyn EmbeddingCacheProvider>, String> {
    Ok(Arc::new(NullEmbeddingCache::new()))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static NULL_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "null",
    description: "No-op cache (caching disabled)",
    factory: null_factory,
};
