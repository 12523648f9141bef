//! Application Ports
//!
//! - **registry/** - Auto-registration system for plugin providers
//! - **services** - Service interfaces consumed by the transport layer
//!
//! Provider traits themselves live in `align_domain::ports` and are
//! re-exported here for convenience.

/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use align_domain::ports::{CacheStats, EmbeddingCacheProvider, EmbeddingProvider};
pub use registry::{
    CacheProviderConfig, CacheProviderEntry, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
pub use services::MapServiceInterface;
