//! Domain layer constants
//!
//! Scoring weights and thresholds are part of the mapping contract: changing
//! any of them changes which edges are produced, so they live here rather
//! than in configuration.

// ============================================================================
// HEURISTIC SIGNAL WEIGHTS
// ============================================================================

/// Weight of the entity-name / doc-title token overlap signal
pub const HEURISTIC_WEIGHT_NAME: f64 = 0.4;

/// Weight of the leading path-segment overlap signal
pub const HEURISTIC_WEIGHT_PATH: f64 = 0.2;

/// Weight of the parameter-name / heading signal.
///
/// Absent signatures contribute 0 at this weight; the remaining weights are
/// not renormalized.
pub const HEURISTIC_WEIGHT_SIGNATURE: f64 = 0.2;

/// Weight of the best heading token overlap signal
pub const HEURISTIC_WEIGHT_HEADING: f64 = 0.2;

/// Minimum token length kept by the name tokenizer
pub const TOKEN_MIN_LENGTH: usize = 3;

// ============================================================================
// SCORE BLENDING
// ============================================================================

/// Share of the heuristic score when both scorers are enabled
pub const BLEND_HEURISTICS_WEIGHT: f64 = 0.6;

/// Share of the embedding score when both scorers are enabled
pub const BLEND_EMBEDDING_WEIGHT: f64 = 0.4;

// ============================================================================
// TIERS
// ============================================================================

/// Heuristic score at or above which confidence is `high`
pub const CONFIDENCE_HIGH_THRESHOLD: f64 = 0.8;

/// Heuristic score at or above which confidence is `medium`
pub const CONFIDENCE_MEDIUM_THRESHOLD: f64 = 0.5;

/// Blended score at or above which the relation is `describes`
pub const RELATION_DESCRIBES_THRESHOLD: f64 = 0.8;

/// Blended score at or above which the relation is `references`
pub const RELATION_REFERENCES_THRESHOLD: f64 = 0.5;

// ============================================================================
// REQUEST DEFAULTS
// ============================================================================

/// Pairs scoring below this are discarded
pub const DEFAULT_MIN_SCORE_THRESHOLD: f64 = 0.3;

/// Maximum number of mappings kept per code entity
pub const DEFAULT_MAX_MAPPINGS_PER_ENTITY: usize = 5;

// ============================================================================
// EMBEDDINGS
// ============================================================================

/// Default embedding dimensionality (matches text-embedding-3-small)
pub const EMBEDDING_DIMENSION_DEFAULT: usize = 1536;

/// Model label attached to deterministic fallback vectors
pub const FALLBACK_EMBEDDING_MODEL: &str = "sha256-fallback";

/// Number of doc headings included in the doc embedding text
pub const DOC_TEXT_MAX_HEADINGS: usize = 5;

/// Upper bound on a single embedding provider call
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

/// Embedding provider calls in flight per request
pub const DEFAULT_MAX_CONCURRENT_EMBEDDINGS: usize = 4;
