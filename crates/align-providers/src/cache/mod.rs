//! Embedding Cache Implementations
//!
//! | Provider | Registry name | Description |
//! |----------|---------------|-------------|
//! | [`MokaEmbeddingCache`] | `moka` | Bounded in-memory cache with optional TTL |
//! | [`NullEmbeddingCache`] | `null` | Stores nothing |

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;

#[cfg(feature = "cache-moka")]
pub use moka::MokaEmbeddingCache;
pub use null::NullEmbeddingCache;

pub use align_domain::ports::CacheStats;
