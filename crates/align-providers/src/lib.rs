//! # Align - Provider Implementations
//!
//! User-selectable implementations of the ports defined in `align-domain`.
//! Each provider registers itself in the linkme slices declared by
//! `align-application`, so linking this crate is enough to make them
//! resolvable by name.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI, Ollama, Hash |
//! | Cache | `EmbeddingCacheProvider` | Moka, Null |
//! | Transport | - | NATS |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! align-providers = { version = "0.1", default-features = false, features = ["embedding-ollama", "cache-moka"] }
//! ```

pub use align_domain::error::{Error, Result};
pub use align_domain::ports::{EmbeddingCacheProvider, EmbeddingProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Embedding cache implementations
pub mod cache;

/// Request/result transport
pub mod transport;
