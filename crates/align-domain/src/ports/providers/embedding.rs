use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Interface
///
/// Contract for services that turn text into dense vectors. Implementations
/// report failures as errors; deciding what to do about a failure (fallback,
/// retry, logging) is the caller's business.
///
/// # Default Implementations
///
/// The `embed()` method has a default implementation that delegates to
/// `embed_batch()` with a single item. Providers only need to implement
/// `embed_batch()` unless custom single-item optimization is needed.
///
/// # Example
///
/// ```ignore
/// use align_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("Name: getUser. Type: function").await?;
/// assert_eq!(embedding.vector.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of the vectors this provider produces
    fn dimensions(&self) -> usize;

    /// Identifier of this provider implementation (e.g. "openai", "ollama")
    fn provider_name(&self) -> &str;
}
