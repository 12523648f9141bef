//! Embedding provider configuration types

use std::time::Duration;

use align_application::ports::registry::EmbeddingProviderConfig;
use align_domain::constants::{
    DEFAULT_EMBEDDING_TIMEOUT_SECS, DEFAULT_MAX_CONCURRENT_EMBEDDINGS, EMBEDDING_DIMENSION_DEFAULT,
};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EMBEDDING_PROVIDER, EMBEDDING_PROVIDER_NONE};

/// Embedding provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider name (`openai`, `ollama`, `hash`, or `none` for fallback vectors only)
    pub provider: String,
    /// Model name, provider default when unset
    pub model: Option<String>,
    /// API key for hosted providers
    pub api_key: Option<String>,
    /// Custom API base URL
    pub base_url: Option<String>,
    /// Vector length every embedding must have
    pub dimensions: usize,
    /// Upper bound on one provider call
    pub timeout_secs: u64,
    /// Provider calls in flight per request
    pub max_concurrent_requests: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            api_key: None,
            base_url: None,
            dimensions: EMBEDDING_DIMENSION_DEFAULT,
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_EMBEDDINGS,
        }
    }
}

impl EmbeddingConfig {
    /// Per-call timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether an external provider is configured at all
    pub fn is_disabled(&self) -> bool {
        self.provider.trim().is_empty() || self.provider.eq_ignore_ascii_case(EMBEDDING_PROVIDER_NONE)
    }

    /// Registry configuration, `None` when the provider is disabled
    pub fn to_provider_config(&self) -> Option<EmbeddingProviderConfig> {
        if self.is_disabled() {
            return None;
        }

        let mut config = EmbeddingProviderConfig::new(self.provider.trim())
            .with_dimensions(self.dimensions)
            .with_timeout(self.timeout());
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key);
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        Some(config)
    }
}
