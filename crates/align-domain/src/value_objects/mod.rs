//! Domain Value Objects
//!
//! Immutable value objects without identity of their own.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of entity or doc text |
//! | [`EntityMapping`] | Scored, typed edge from a code entity to a doc |
//! | [`Relation`] | describes / references / mentions |
//! | [`Confidence`] | high / medium / low heuristic tier |
//! | [`MapRequest`] | Batch of entities and docs plus options |
//! | [`MapResult`] | Ordered mappings plus request bookkeeping |

/// Semantic embedding value objects
pub mod embedding;
/// Mapping edge value objects
pub mod mapping;
/// Request and result messages
pub mod request;

pub use embedding::{Embedding, content_key, cosine_similarity, similarity_to_unit};
pub use mapping::{Confidence, EntityMapping, MappingMetadata, Relation};
pub use request::{DecodedMapRequest, MapOptions, MapRequest, MapResult};
