//! Embedding Service
//!
//! Cache-first text embedding with a deterministic fallback. Failing to embed
//! is never an error for callers: a provider error, a timeout, a vector of the
//! wrong size or the absence of a provider all produce
//! [`Embedding::deterministic`] instead, which is cached like any other vector.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use align_domain::constants::{
    DEFAULT_EMBEDDING_TIMEOUT_SECS, DEFAULT_MAX_CONCURRENT_EMBEDDINGS, EMBEDDING_DIMENSION_DEFAULT,
};
use align_domain::ports::{CacheStats, EmbeddingCacheProvider, EmbeddingProvider};
use align_domain::value_objects::{Embedding, content_key};
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

/// Embeds texts through a shared cache, an optional provider and a fallback
pub struct EmbeddingService {
    provider: Option<Arc<dyn EmbeddingProvider>>,
    cache: Arc<dyn EmbeddingCacheProvider>,
    dimensions: usize,
    timeout: Duration,
    max_concurrent_requests: usize,
}

impl std::fmt::Debug for EmbeddingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingService")
            .field("provider", &self.provider_name())
            .field("cache", &self.cache.provider_name())
            .field("dimensions", &self.dimensions)
            .field("timeout", &self.timeout)
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .finish()
    }
}

impl EmbeddingService {
    /// Create a service; `provider = None` always uses the fallback
    pub fn new(
        provider: Option<Arc<dyn EmbeddingProvider>>,
        cache: Arc<dyn EmbeddingCacheProvider>,
        dimensions: usize,
    ) -> Self {
        Self {
            provider,
            cache,
            dimensions: if dimensions == 0 {
                EMBEDDING_DIMENSION_DEFAULT
            } else {
                dimensions
            },
            timeout: Duration::from_secs(DEFAULT_EMBEDDING_TIMEOUT_SECS),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_EMBEDDINGS,
        }
    }

    /// Bound each provider call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Limit in-flight provider calls during [`embed_all`](Self::embed_all)
    pub fn with_max_concurrent_requests(mut self, max: usize) -> Self {
        self.max_concurrent_requests = max.max(1);
        self
    }

    /// Vector dimensionality of every embedding this service returns
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Name of the configured provider, `"none"` without one
    pub fn provider_name(&self) -> &str {
        self.provider
            .as_ref()
            .map_or("none", |provider| provider.provider_name())
    }

    /// Cache statistics
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Embed one text, consulting the cache first
    pub async fn embed(&self, text: &str) -> Embedding {
        let key = content_key(text);
        self.cache
            .get_or_insert_with(&key, Box::pin(self.generate(text)))
            .await
    }

    /// Embed every distinct text with bounded concurrency
    ///
    /// The returned map is keyed by text. Completion order is unspecified.
    pub async fn embed_all<I>(&self, texts: I) -> HashMap<String, Embedding>
    where
        I: IntoIterator<Item = String>,
    {
        let unique: HashSet<String> = texts.into_iter().collect();
        let total = unique.len();

        let embedded: HashMap<String, Embedding> = stream::iter(unique)
            .map(|text| async move {
                let embedding = self.embed(&text).await;
                (text, embedding)
            })
            .buffer_unordered(self.max_concurrent_requests)
            .collect()
            .await;

        debug!(
            texts = total,
            fallbacks = embedded.values().filter(|e| e.is_fallback()).count(),
            "embedded request texts"
        );
        embedded
    }

    /// Call the provider, falling back on any failure
    async fn generate(&self, text: &str) -> Embedding {
        let Some(provider) = &self.provider else {
            return Embedding::deterministic(text, self.dimensions);
        };

        match tokio::time::timeout(self.timeout, provider.embed(text)).await {
            Ok(Ok(embedding)) if embedding.vector.len() == self.dimensions => embedding,
            Ok(Ok(embedding)) => {
                warn!(
                    provider = provider.provider_name(),
                    expected = self.dimensions,
                    actual = embedding.vector.len(),
                    "embedding has unexpected dimensions, using fallback"
                );
                Embedding::deterministic(text, self.dimensions)
            }
            Ok(Err(e)) => {
                warn!(
                    provider = provider.provider_name(),
                    error = %e,
                    "embedding request failed, using fallback"
                );
                Embedding::deterministic(text, self.dimensions)
            }
            Err(_) => {
                warn!(
                    provider = provider.provider_name(),
                    timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                    "embedding request timed out, using fallback"
                );
                Embedding::deterministic(text, self.dimensions)
            }
        }
    }
}
