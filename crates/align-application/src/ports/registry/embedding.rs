//! Embedding provider registry
//!
//! Providers in `align-providers` add an [`EmbeddingProviderEntry`] to
//! [`EMBEDDING_PROVIDERS`]; the composition root picks one by name.

use std::sync::Arc;
use std::time::Duration;

use super::find_entry;
use crate::ports::EmbeddingProvider;

/// Settings handed to an embedding provider factory
///
/// Factories read the fields they understand and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingProviderConfig {
    /// Registered provider name (`openai`, `ollama`, `hash`)
    pub provider: String,
    /// Model, provider default when unset
    pub model: Option<String>,
    /// API key for hosted providers
    pub api_key: Option<String>,
    /// Base URL override
    pub base_url: Option<String>,
    /// Expected vector length
    pub dimensions: Option<usize>,
    /// Per-request timeout
    pub timeout: Option<Duration>,
}

impl EmbeddingProviderConfig {
    /// Settings selecting `provider` with everything else unset
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the expected vector length
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Factory signature shared by all embedding providers
pub type EmbeddingProviderFactory =
    fn(&EmbeddingProviderConfig) -> Result<Arc<dyn EmbeddingProvider>, String>;

/// One registered embedding provider
pub struct EmbeddingProviderEntry {
    /// Name used in configuration
    pub name: &'static str,
    /// Shown by `align providers`
    pub description: &'static str,
    /// Builds an instance from settings
    pub factory: EmbeddingProviderFactory,
}

#[linkme::distributed_slice]
pub static EMBEDDING_PROVIDERS: [EmbeddingProviderEntry] = [..];

/// Build the provider named by `config.provider`
///
/// Errors name the available providers when the name is unknown, and carry
/// the factory's message when construction fails.
pub fn resolve_embedding_provider(
    config: &EmbeddingProviderConfig,
) -> Result<Arc<dyn EmbeddingProvider>, String> {
    let entry = find_entry(EMBEDDING_PROVIDERS.static_slice(), &config.provider, |e| e.name, "embedding")?;
    (entry.factory)(config)
}

/// `(name, description)` of every registered embedding provider
pub fn list_embedding_providers() -> Vec<(&'static str, &'static str)> {
    EMBEDDING_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
