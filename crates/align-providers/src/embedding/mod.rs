//! Embedding Provider Implementations
//!
//! Converts entity and doc text into dense vectors.
//!
//! ## Available Providers
//!
//! | Provider | Type | Registry name |
//! |----------|------|---------------|
//! | [`OpenAIEmbeddingProvider`] | Cloud | `openai` |
//! | [`OllamaEmbeddingProvider`] | Local | `ollama` |
//! | [`HashEmbeddingProvider`] | Offline | `hash` |

pub mod hash;
pub mod helpers;
#[cfg(feature = "embedding-ollama")]
pub mod ollama;
#[cfg(feature = "embedding-openai")]
pub mod openai;

pub use hash::HashEmbeddingProvider;
pub use helpers::constructor;
#[cfg(feature = "embedding-ollama")]
pub use ollama::OllamaEmbeddingProvider;
#[cfg(feature = "embedding-openai")]
pub use openai::OpenAIEmbeddingProvider;
