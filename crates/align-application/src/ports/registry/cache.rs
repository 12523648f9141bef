//! Embedding cache registry
//!
//! Cache implementations add a [`CacheProviderEntry`] to [`CACHE_PROVIDERS`].
//! A disabled cache is expressed by selecting `null`.

use std::sync::Arc;

use super::find_entry;
use crate::ports::EmbeddingCacheProvider;

/// Configuration for cache provider creation
#[derive(Debug, Clone, Default)]
pub struct CacheProviderConfig {
    /// Provider name (e.g., "moka", "null")
    pub provider: String,
    /// Maximum number of cached vectors
    pub max_entries: Option<u64>,
    /// Time to live in seconds
    pub ttl_secs: Option<u64>,
}

impl CacheProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the entry limit
    pub fn with_max_entries(mut self, max_entries: u64) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Set the TTL in seconds
    pub fn with_ttl_secs(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = Some(ttl_secs);
        self
    }
}

/// Factory signature shared by all cache providers
pub type CacheProviderFactory =
    fn(&CacheProviderConfig) -> Result<Arc<dyn EmbeddingCacheProvider>, String>;

/// One registered cache provider
pub struct CacheProviderEntry {
    /// Name used in configuration
    pub name: &'static str,
    /// Shown by `align providers`
    pub description: &'static str,
    /// Builds an instance from settings
    pub factory: CacheProviderFactory,
}

#[linkme::distributed_slice]
pub static CACHE_PROVIDERS: [CacheProviderEntry] = [..];

/// Build the cache named by `config.provider`
pub fn resolve_cache_provider(
    config: &CacheProviderConfig,
) -> Result<Arc<dyn EmbeddingCacheProvider>, String> {
    let entry = find_entry(CACHE_PROVIDERS.static_slice(), &config.provider, |e| e.name, "cache")?;
    (entry.factory)(config)
}

/// List all registered cache providers as (name, description) tuples
pub fn list_cache_providers() -> Vec<(&'static str, &'static str)> {
    CACHE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
