//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! 1. Provider defines:  #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//!                       static ENTRY: EmbeddingProviderEntry = ...
//!                             |
//! 2. Registry declares: #[linkme::distributed_slice]
//!                       pub static EMBEDDING_PROVIDERS: [Entry] = [..]
//!                             |
//! 3. Resolver queries:  EMBEDDING_PROVIDERS.iter()
//!                             |
//! 4. Config selects:    "provider = openai" -> OpenAIEmbeddingProvider
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in align-providers)
//!
//! ```ignore
//! use align_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static OLLAMA_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "ollama",
//!     description: "Ollama local embedding provider",
//!     factory: ollama_factory,
//! };
//! ```
//!
//! ### Resolving a Provider (in align-infrastructure)
//!
//! ```ignore
//! use align_application::ports::registry::resolve_embedding_provider;
//!
//! let config = EmbeddingProviderConfig::new("ollama");
//! let provider = resolve_embedding_provider(&config)?;
//! ```

pub mod cache;
pub mod embedding;

/// Find the entry registered as `name`, or describe what is available
fn find_entry<'a, E>(
    entries: &'a [E],
    name: &str,
    entry_name: impl Fn(&E) -> &'static str,
    kind: &str,
) -> Result<&'a E, String> {
    entries
        .iter()
        .find(|&entry| entry_name(entry) == name)
        .ok_or_else(|| {
            let available: Vec<&str> = entries.iter().map(&entry_name).collect();
            format!("Unknown {kind} provider '{name}'. Available providers: {available:?}")
        })
}

pub use cache::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry, CacheProviderFactory,
    list_cache_providers,
    resolve_cache_provider,
};
pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, EmbeddingProviderFactory,
    list_embedding_providers,
    resolve_embedding_provider,
};
