//! Semantic Embedding Value Objects
//!
//! Vector representations of entity and document text, the content-addressed
//! key they are cached under, and the deterministic fallback used when no
//! embedding service answers.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::FALLBACK_EMBEDDING_MODEL;
use crate::error::{Error, Result};

/// Value Object: Semantic Text Embedding
///
/// ## Business Rules
///
/// - Vectors compared with each other must share one dimensionality
/// - Model name identifies the embedding generation method
///
/// ## Example
///
/// ```rust
/// use align_domain::value_objects::Embedding;
///
/// let a = Embedding::deterministic("getUser", 16);
/// let b = Embedding::deterministic("getUser", 16);
/// assert_eq!(a, b);
/// assert!(a.is_fallback());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Wrap a provider vector
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Deterministic pseudo-embedding derived from the text bytes
    ///
    /// The SHA-256 digest of `text` is tiled to `dimensions` values and each
    /// byte `b` is mapped to `b / 127.5 - 1.0`, so every component lies in
    /// `[-1, 1]`. The result depends on nothing but `text` and `dimensions`.
    pub fn deterministic(text: &str, dimensions: usize) -> Self {
        let digest = Sha256::digest(text.as_bytes());
        let vector = digest
            .iter()
            .cycle()
            .take(dimensions)
            .map(|&byte| (f32::from(byte) / 127.5) - 1.0)
            .collect();

        Self {
            vector,
            model: FALLBACK_EMBEDDING_MODEL.to_string(),
            dimensions,
        }
    }

    /// Whether this vector came from the deterministic fallback
    pub fn is_fallback(&self) -> bool {
        self.model == FALLBACK_EMBEDDING_MODEL
    }
}

/// Content-addressed cache key for a text: lowercase hex SHA-256
pub fn content_key(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// Cosine similarity of two vectors in `[-1, 1]`
///
/// Zero-norm vectors have similarity 0. Vectors of different or zero length
/// cannot be compared and produce an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::invalid_argument("cannot compare empty vectors"));
    }
    if a.len() != b.len() {
        return Err(Error::invalid_argument(format!(
            "vector dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0))
}

/// Remap a cosine similarity from `[-1, 1]` to `[0, 1]`
pub fn similarity_to_unit(cosine: f64) -> f64 {
    ((cosine + 1.0) / 2.0).clamp(0.0, 1.0)
}
