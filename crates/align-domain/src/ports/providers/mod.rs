//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text embedding generation services |
//! | EmbeddingCacheProvider | Content-addressed embedding cache |

/// Embedding cache port
pub mod cache;
/// Embedding provider port
pub mod embedding;

pub use cache::{CacheStats, EmbeddingCacheProvider};
pub use embedding::EmbeddingProvider;
