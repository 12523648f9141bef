//! # Align - Domain Layer
//!
//! Core types shared by every layer of the documentation mapping engine.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Code entities and documentation entities supplied by scanners |
//! | [`value_objects`] | Embeddings, mapping edges, request and result messages |
//! | [`ports`] | Provider contracts (embedding providers, embedding caches) |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Scoring weights, thresholds and defaults |
//!
//! The domain layer has no knowledge of transports, HTTP clients or
//! configuration files. Those live in the providers and infrastructure crates.

/// Scoring weights, thresholds and defaults
pub mod constants;
/// Code and documentation entities
pub mod entities;
/// Error handling types
pub mod error;
/// Provider ports
pub mod ports;
/// Value objects
pub mod value_objects;

pub use entities::{CodeEntity, DocEntity, EntityKind, Heading, Signature};
pub use error::{Error, Result};
pub use value_objects::{
    Confidence, Embedding, EntityMapping, MapOptions, MapRequest, MapResult, MappingMetadata,
    Relation,
};
