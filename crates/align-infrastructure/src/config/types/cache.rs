//! Embedding cache configuration types

use align_application::ports::registry::CacheProviderConfig;
use align_providers::constants::CACHE_DEFAULT_MAX_ENTRIES;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_PROVIDER, NULL_CACHE_PROVIDER};

/// Embedding cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache embeddings across requests
    pub enabled: bool,
    /// Cache provider name
    pub provider: String,
    /// Maximum number of cached vectors
    pub max_entries: u64,
    /// Time to live in seconds (0 = entries never expire)
    ///
    /// Fallback vectors are cached too, so a TTL lets them age out after a
    /// provider outage.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            max_entries: CACHE_DEFAULT_MAX_ENTRIES,
            ttl_secs: 0,
        }
    }
}

impl CacheConfig {
    /// Registry configuration; a disabled cache resolves to the null provider
    pub fn to_provider_config(&self) -> CacheProviderConfig {
        if !self.enabled {
            return CacheProviderConfig::new(NULL_CACHE_PROVIDER);
        }
        CacheProviderConfig::new(&self.provider)
            .with_max_entries(self.max_entries)
            .with_ttl_secs(self.ttl_secs)
    }
}
