//! Heuristic scorer for entity/doc pairs
//!
//! Lexical and structural similarity without any model:
//!
//! ```text
//! name      0.4  entity-name tokens covered by the doc title
//! path      0.2  leading path segments shared from the root
//! signature 0.2  parameter names found in doc headings (callables only)
//! heading   0.2  best entity-name token coverage over doc headings
//! ```
//!
//! A signal that does not apply (no signature, no headings) contributes 0 at
//! its weight. Weights are not renormalized, so an entity without a signature
//! tops out at 0.8.

use std::collections::HashSet;

use align_domain::constants::{
    HEURISTIC_WEIGHT_HEADING, HEURISTIC_WEIGHT_NAME, HEURISTIC_WEIGHT_PATH,
    HEURISTIC_WEIGHT_SIGNATURE, TOKEN_MIN_LENGTH,
};
use align_domain::entities::{CodeEntity, DocEntity, Heading};
use align_domain::value_objects::Confidence;
use unicode_segmentation::UnicodeSegmentation;

/// Weights applied to the four heuristic signals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeights {
    /// Name/title overlap weight
    pub name: f64,
    /// Path prefix weight
    pub path: f64,
    /// Signature/heading weight
    pub signature: f64,
    /// Heading overlap weight
    pub heading: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            name: HEURISTIC_WEIGHT_NAME,
            path: HEURISTIC_WEIGHT_PATH,
            signature: HEURISTIC_WEIGHT_SIGNATURE,
            heading: HEURISTIC_WEIGHT_HEADING,
        }
    }
}

/// Per-signal values for one pair, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeuristicBreakdown {
    /// Name/title token coverage
    pub name: f64,
    /// Shared leading path segments ratio
    pub path: f64,
    /// Parameter coverage; `None` when the entity has no applicable signature
    pub signature: Option<f64>,
    /// Best heading token coverage
    pub heading: f64,
}

/// Heuristic score of one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicScore {
    /// Weighted sum in `[0, 1]`
    pub score: f64,
    /// Tier of `score`
    pub confidence: Confidence,
    /// Individual signals
    pub breakdown: HeuristicBreakdown,
}

/// Scores entity/doc pairs from names, paths, signatures and headings
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    weights: HeuristicWeights,
}

impl HeuristicScorer {
    /// Create a scorer with the standard weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom weights
    pub fn with_weights(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    /// Current weights
    pub fn weights(&self) -> HeuristicWeights {
        self.weights
    }

    /// Score a pair
    pub fn score(&self, entity: &CodeEntity, doc: &DocEntity) -> HeuristicScore {
        let breakdown = self.breakdown(entity, doc);
        let w = &self.weights;

        let score = (breakdown.name * w.name
            + breakdown.path * w.path
            + breakdown.signature.unwrap_or(0.0) * w.signature
            + breakdown.heading * w.heading)
            .clamp(0.0, 1.0);

        HeuristicScore {
            score,
            confidence: Confidence::from_score(score),
            breakdown,
        }
    }

    /// Compute every signal without weighting
    pub fn breakdown(&self, entity: &CodeEntity, doc: &DocEntity) -> HeuristicBreakdown {
        let entity_tokens = tokenize(&entity.name);

        HeuristicBreakdown {
            name: token_coverage(&entity_tokens, &tokenize(doc.title_or_empty())),
            path: path_similarity(&entity.path, &doc.path),
            signature: signature_similarity(entity, &doc.headings),
            heading: heading_similarity(&entity_tokens, &doc.headings),
        }
    }
}

/// Split text into lowercase word tokens
///
/// Splits on Unicode word boundaries, on any non-alphanumeric character
/// (covers snake_case, kebab-case and dotted names) and on camelCase /
/// PascalCase humps. Tokens shorter than three characters are dropped.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.unicode_words()
        .flat_map(|word| word.split(|c: char| !c.is_alphanumeric()))
        .flat_map(split_camel_case)
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() >= TOKEN_MIN_LENGTH)
        .collect()
}

/// Split a word at camelCase boundaries: `getHTTPResponse` → `get`, `HTTP`, `Response`
fn split_camel_case(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (idx, cur) = chars[i];
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());

        let boundary = cur.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_numeric()
                || (prev.is_uppercase() && next_is_lower));

        if boundary {
            parts.push(&word[start..idx]);
            start = idx;
        }
    }

    parts.push(&word[start..]);
    parts
}

/// Share of `subject` tokens that also appear in `other`
///
/// Zero when either side is empty.
pub fn token_coverage(subject: &HashSet<String>, other: &HashSet<String>) -> f64 {
    if subject.is_empty() || other.is_empty() {
        return 0.0;
    }
    subject.intersection(other).count() as f64 / subject.len() as f64
}

/// Shared leading segments over the longer path's segment count
pub fn path_similarity(entity_path: &str, doc_path: &str) -> f64 {
    let entity_parts = path_segments(entity_path);
    let doc_parts = path_segments(doc_path);

    let max_parts = entity_parts.len().max(doc_parts.len());
    if max_parts == 0 {
        return 0.0;
    }

    let common = entity_parts
        .iter()
        .zip(&doc_parts)
        .take_while(|(a, b)| a == b)
        .count();

    common as f64 / max_parts as f64
}

fn path_segments(path: &str) -> Vec<&str> {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}

/// Fraction of parameter names contained (case-insensitively) in any heading
///
/// `None` unless the entity is a function or method that declares parameters.
pub fn signature_similarity(entity: &CodeEntity, headings: &[Heading]) -> Option<f64> {
    let names = entity.parameter_names()?;
    let heading_texts: Vec<String> = headings.iter().map(|h| h.text.to_lowercase()).collect();

    let matches = names
        .iter()
        .map(|name| name.to_lowercase())
        .filter(|name| heading_texts.iter().any(|text| text.contains(name.as_str())))
        .count();

    Some(matches as f64 / names.len() as f64)
}

/// Best token coverage of the entity name over all headings
pub fn heading_similarity(entity_tokens: &HashSet<String>, headings: &[Heading]) -> f64 {
    headings
        .iter()
        .map(|heading| token_coverage(entity_tokens, &tokenize(&heading.text)))
        .fold(0.0, f64::max)
}
