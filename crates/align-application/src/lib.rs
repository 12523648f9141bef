//! Application Layer - Align
//!
//! Orchestrates the mapping of code entities to documentation.
//!
//! ## Architecture
//!
//! ```text
//! MapRequest
//!     |
//!     v
//! MapService ── validate, select, bookkeeping
//!     |
//!     v
//! MappingEngine
//!     +-> EmbeddingService (cache -> provider -> deterministic fallback)
//!     +-> HeuristicScorer  (name, path, signature, heading)
//!     |
//!     v
//! blend -> threshold -> relation/anchor -> rank -> cap
//!     |
//!     v
//! MapResult
//! ```
//!
//! ## Dependencies
//!
//! This crate depends only on `align-domain` and pure Rust libraries.
//! Concrete providers are discovered through the linkme registry in
//! [`ports::registry`].

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
