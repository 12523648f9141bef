//! Mapping edge value objects

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIDENCE_HIGH_THRESHOLD, CONFIDENCE_MEDIUM_THRESHOLD, RELATION_DESCRIBES_THRESHOLD,
    RELATION_REFERENCES_THRESHOLD,
};

/// How a doc relates to the entity it is mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Primary documentation of the entity
    Describes,
    /// Secondary reference
    References,
    /// Weak or incidental mention
    Mentions,
}

impl Relation {
    /// Classify a blended score
    pub fn from_score(score: f64) -> Self {
        if score >= RELATION_DESCRIBES_THRESHOLD {
            Self::Describes
        } else if score >= RELATION_REFERENCES_THRESHOLD {
            Self::References
        } else {
            Self::Mentions
        }
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Describes => "describes",
            Self::References => "references",
            Self::Mentions => "mentions",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse strength of the heuristic match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Heuristic score >= 0.8
    High,
    /// Heuristic score >= 0.5
    Medium,
    /// Anything lower
    Low,
}

impl Confidence {
    /// Tier a heuristic score
    pub fn from_score(heuristics_score: f64) -> Self {
        if heuristics_score >= CONFIDENCE_HIGH_THRESHOLD {
            Self::High
        } else if heuristics_score >= CONFIDENCE_MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive context copied onto each edge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingMetadata {
    /// Kind of the mapped entity
    pub entity_kind: String,
    /// Language of the mapped entity
    pub entity_lang: String,
    /// Title of the mapped doc
    #[serde(default)]
    pub doc_title: Option<String>,
}

/// Value Object: a scored, typed edge from one code entity to one doc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMapping {
    /// `"{entity_id}:{doc_id}"`
    pub id: String,
    /// Project the request belonged to
    #[serde(default)]
    pub project_id: String,
    /// Mapped code entity
    pub entity_id: String,
    /// Mapped doc entity
    pub doc_id: String,
    /// Heading anchor inside the doc, when one names the entity
    #[serde(default)]
    pub anchor: Option<String>,
    /// Blended score in `[0, 1]`
    pub score: f64,
    /// Relation derived from `score`
    pub relation: Relation,
    /// Confidence derived from `heuristics_score`
    pub confidence: Confidence,
    /// Heuristic component in `[0, 1]`
    pub heuristics_score: f64,
    /// Embedding component in `[0, 1]`
    pub embedding_score: f64,
    /// Reserved for human correction; the engine always leaves it `false`
    #[serde(default)]
    pub manual_override: bool,
    /// Descriptive context
    #[serde(default)]
    pub metadata: MappingMetadata,
}

impl EntityMapping {
    /// Deterministic edge identifier for an entity/doc pair
    pub fn mapping_id(entity_id: &str, doc_id: &str) -> String {
        format!("{entity_id}:{doc_id}")
    }
}
