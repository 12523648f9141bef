//! Domain Services
//!
//! Scoring and ranking logic behind the map use case.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`EmbeddingService`] | Cache-first embedding with deterministic fallback |
//! | [`HeuristicScorer`] | Name, path, signature and heading similarity |
//! | [`MappingEngine`] | Blend, threshold, classify, rank and cap |

/// Cached embedding generation
pub mod embedding;
/// Heuristic pair scoring
pub mod heuristics;
/// Pair scoring and ranking
pub mod mapping;

pub use embedding::EmbeddingService;
pub use heuristics::{HeuristicBreakdown, HeuristicScore, HeuristicScorer, HeuristicWeights};
pub use mapping::{MappingEngine, blend_scores, find_anchor};
