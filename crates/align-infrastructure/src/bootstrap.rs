//! Composition root
//!
//! Resolves the configured embedding provider and cache from the linkme
//! registries and wires them into the mapping engine and map service.
//!
//! ```text
//! AppConfig → registry (embedding, cache) → EmbeddingService → MappingEngine → MapServiceImpl
//! ```

use std::sync::Arc;

use align_application::domain_services::{EmbeddingService, MappingEngine};
use align_application::ports::registry::{resolve_cache_provider, resolve_embedding_provider};
use align_application::ports::{EmbeddingCacheProvider, EmbeddingProvider, MapServiceInterface};
use align_application::use_cases::MapServiceImpl;
use align_domain::error::Result;
use tracing::{info, warn};

// Linking the providers crate is what fills the registries
use align_providers as _;

use crate::config::{AppConfig, CacheConfig, EmbeddingConfig};
use crate::error_ext::registry_error;

/// Application context holding the configuration and the wired services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    embedding_service: Arc<EmbeddingService>,
    map_service: Arc<dyn MapServiceInterface>,
}

impl AppContext {
    /// Shared embedding service (provider, cache and fallback)
    pub fn embedding_service(&self) -> Arc<EmbeddingService> {
        Arc::clone(&self.embedding_service)
    }

    /// Map service handling decoded requests and raw payloads
    pub fn map_service(&self) -> Arc<dyn MapServiceInterface> {
        Arc::clone(&self.map_service)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("embedding_provider", &self.embedding_service.provider_name())
            .field("dimensions", &self.embedding_service.dimensions())
            .finish_non_exhaustive()
    }
}

/// Build the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let provider = resolve_embedding(&config.embedding)?;
    let cache = resolve_cache(&config.cache)?;

    let embedding_service = Arc::new(
        EmbeddingService::new(provider, cache, config.embedding.dimensions)
            .with_timeout(config.embedding.timeout())
            .with_max_concurrent_requests(config.embedding.max_concurrent_requests),
    );
    let engine = Arc::new(MappingEngine::new(Arc::clone(&embedding_service)));
    let map_service: Arc<dyn MapServiceInterface> = Arc::new(MapServiceImpl::new(engine));

    info!(
        embedding_provider = embedding_service.provider_name(),
        dimensions = embedding_service.dimensions(),
        cache_provider = config.cache.to_provider_config().provider.as_str(),
        "Application context initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        embedding_service,
        map_service,
    })
}

/// Resolve the embedding provider, `None` when embeddings use only the local fallback
///
/// A hosted provider without an API key degrades to the fallback instead of
/// failing startup; unknown provider names are configuration errors.
pub fn resolve_embedding(config: &EmbeddingConfig) -> Result<Option<Arc<dyn EmbeddingProvider>>> {
    let Some(provider_config) = config.to_provider_config() else {
        info!("No embedding provider configured, using deterministic fallback vectors");
        return Ok(None);
    };

    if provider_config.provider == "openai" && provider_config.api_key.is_none() {
        warn!("No OpenAI API key configured, using deterministic fallback vectors");
        return Ok(None);
    }

    resolve_embedding_provider(&provider_config)
        .map(Some)
        .map_err(|e| registry_error("embedding", e))
}

/// Resolve the embedding cache
pub fn resolve_cache(config: &CacheConfig) -> Result<Arc<dyn EmbeddingCacheProvider>> {
    resolve_cache_provider(&config.to_provider_config()).map_err(|e| registry_error("cache", e))
}
