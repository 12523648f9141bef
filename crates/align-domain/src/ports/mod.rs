//! Domain Port Interfaces
//!
//! Contracts that the providers crate implements and the application layer
//! consumes. High-level code depends on these traits, never on a concrete
//! HTTP client or cache library.

/// External service provider ports
pub mod providers;

pub use providers::{CacheStats, EmbeddingCacheProvider, EmbeddingProvider};
