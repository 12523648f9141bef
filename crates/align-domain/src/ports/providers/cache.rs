//! Embedding Cache Port
//!
//! Content-addressed storage for embedding vectors, shared by every request
//! handled in a process. Implementations must be safe under concurrent
//! writers: when several tasks miss on the same key at once, exactly one
//! initialiser result is stored and every caller observes that value.

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::value_objects::Embedding;

/// Cache Operation Statistics
///
/// # Example
///
/// ```rust
/// use align_domain::ports::providers::CacheStats;
///
/// let stats = CacheStats { hits: 3, misses: 1, ..Default::default() };
/// assert_eq!(stats.calculate_hit_rate(), 0.75);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of cache entries
    pub entries: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Calculate hit rate from hits and misses
    pub fn calculate_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Embedding Cache Provider Port
///
/// # Implementations
///
/// - **Moka**: bounded in-memory cache with optional TTL
/// - **Null**: never stores; every lookup runs the initialiser
#[async_trait]
pub trait EmbeddingCacheProvider: Send + Sync + std::fmt::Debug {
    /// Look up a cached embedding
    async fn get(&self, key: &str) -> Option<Embedding>;

    /// Return the cached embedding for `key`, running `init` on a miss
    ///
    /// Concurrent callers missing on the same key share one initialiser run.
    async fn get_or_insert_with(&self, key: &str, init: BoxFuture<'_, Embedding>) -> Embedding;

    /// Drop every entry
    async fn clear(&self);

    /// Current statistics
    async fn stats(&self) -> CacheStats;

    /// Identifier of this cache implementation (e.g. "moka", "null")
    fn provider_name(&self) -> &str;
}
