//! Hash embedding provider
//!
//! Deterministic SHA-256 pseudo-embeddings. No network, always available.
//! Useful for offline deployments and tests that need a provider which
//! never fails.

use std::sync::Arc;

use align_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use align_domain::constants::EMBEDDING_DIMENSION_DEFAULT;
use align_domain::error::Result;
use align_domain::ports::EmbeddingProvider;
use align_domain::value_objects::Embedding;
use async_trait::async_trait;

use crate::constants::HASH_PROVIDER_MODEL;

/// Hash-based embedding provider
///
/// # Example
///
/// ```rust
/// use align_providers::embedding::HashEmbeddingProvider;
/// use align_domain::ports::EmbeddingProvider;
///
/// let provider = HashEmbeddingProvider::new(64);
/// assert_eq!(provider.dimensions(), 64);
/// assert_eq!(provider.provider_name(), "hash");
/// ```
#[derive(Debug, Clone)]
pub struct HashEmbeddingProvider {
    dimensions: usize,
}

impl HashEmbeddingProvider {
    /// Create a provider producing vectors of `dimensions` values
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Default for HashEmbeddingProvider {
    fn default() -> Self {
        Self::new(EMBEDDING_DIMENSION_DEFAULT)
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| {
                let fallback = Embedding::deterministic(text, self.dimensions);
                Embedding::new(fallback.vector, HASH_PROVIDER_MODEL)
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "hash"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn hash_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    Ok(Arc::new(HashEmbeddingProvider::new(
        config.dimensions.unwrap_or(EMBEDDING_DIMENSION_DEFAULT),
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static HASH_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "hash",
    description: "Deterministic SHA-256 embeddings (offline, no model)",
    factory: hash_factory,
};
