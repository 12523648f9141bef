//! Map request and result messages
//!
//! One [`MapRequest`] goes in, exactly one [`MapResult`] comes out. Both are
//! JSON on the wire.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_MAPPINGS_PER_ENTITY, DEFAULT_MIN_SCORE_THRESHOLD};
use crate::entities::{CodeEntity, DocEntity};
use crate::error::{Error, Result};
use crate::value_objects::EntityMapping;

/// Scoring configuration carried by a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Score pairs by embedding similarity
    pub use_embeddings: bool,
    /// Score pairs by name/path/signature/heading heuristics
    pub use_heuristics: bool,
    /// Pairs with a blended score below this are discarded
    pub min_score_threshold: f64,
    /// Cap on mappings kept per entity
    pub max_mappings_per_entity: usize,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            use_embeddings: true,
            use_heuristics: true,
            min_score_threshold: DEFAULT_MIN_SCORE_THRESHOLD,
            max_mappings_per_entity: DEFAULT_MAX_MAPPINGS_PER_ENTITY,
        }
    }
}

impl MapOptions {
    /// Toggle embedding scoring
    pub fn with_embeddings(mut self, enabled: bool) -> Self {
        self.use_embeddings = enabled;
        self
    }

    /// Toggle heuristic scoring
    pub fn with_heuristics(mut self, enabled: bool) -> Self {
        self.use_heuristics = enabled;
        self
    }

    /// Set the minimum blended score
    pub fn with_min_score_threshold(mut self, threshold: f64) -> Self {
        self.min_score_threshold = threshold;
        self
    }

    /// Set the per-entity cap
    pub fn with_max_mappings_per_entity(mut self, cap: usize) -> Self {
        self.max_mappings_per_entity = cap;
        self
    }

    /// Reject configurations that cannot produce a meaningful result
    pub fn validate(&self) -> Result<()> {
        if !self.min_score_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.min_score_threshold)
        {
            return Err(Error::invalid_argument(format!(
                "min_score_threshold must be within [0, 1], got {}",
                self.min_score_threshold
            )));
        }
        if self.max_mappings_per_entity == 0 {
            return Err(Error::invalid_argument(
                "max_mappings_per_entity must be at least 1",
            ));
        }
        Ok(())
    }
}

/// A batch of entities and docs to map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRequest {
    /// Project the batch belongs to; required
    #[serde(default)]
    pub project_id: String,
    /// Caller correlation id, echoed on the result
    #[serde(default)]
    pub request_id: String,
    /// Code entities to map
    #[serde(default)]
    pub entities: Vec<CodeEntity>,
    /// Candidate docs
    #[serde(default)]
    pub docs: Vec<DocEntity>,
    /// Restrict processing to these entity ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_ids: Option<Vec<String>>,
    /// Restrict candidates to these doc ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_ids: Option<Vec<String>>,
    /// Scoring configuration
    #[serde(flatten)]
    pub options: MapOptions,
}

/// Wire shape used for tolerant decoding: records stay raw JSON so that one
/// malformed record does not reject the whole batch.
#[derive(Deserialize)]
struct WireMapRequest {
    #[serde(default)]
    project_id: String,
    #[serde(default)]
    request_id: String,
    #[serde(default)]
    entities: Vec<serde_json::Value>,
    #[serde(default)]
    docs: Vec<serde_json::Value>,
    #[serde(default)]
    entity_ids: Option<Vec<String>>,
    #[serde(default)]
    doc_ids: Option<Vec<String>>,
    #[serde(flatten)]
    options: MapOptions,
}

/// Outcome of decoding a request payload
#[derive(Debug, Clone)]
pub struct DecodedMapRequest {
    /// The request with every record that decoded
    pub request: MapRequest,
    /// One message per record that failed to decode
    pub rejected_records: Vec<String>,
}

impl MapRequest {
    /// Create a request with default options
    pub fn new(
        project_id: impl Into<String>,
        entities: Vec<CodeEntity>,
        docs: Vec<DocEntity>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            request_id: String::new(),
            entities,
            docs,
            entity_ids: None,
            doc_ids: None,
            options: MapOptions::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the correlation id
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Decode a JSON payload, dropping records that do not match the schema
    ///
    /// Envelope errors (not JSON, wrong option types) fail the decode;
    /// individual entity or doc records that fail are reported in
    /// [`DecodedMapRequest::rejected_records`].
    pub fn from_slice(payload: &[u8]) -> Result<DecodedMapRequest> {
        let wire: WireMapRequest = serde_json::from_slice(payload)?;
        let mut rejected_records = Vec::new();

        let entities = wire
            .entities
            .into_iter()
            .enumerate()
            .filter_map(|(i, raw)| {
                serde_json::from_value::<CodeEntity>(raw)
                    .map_err(|e| rejected_records.push(format!("entity #{i}: {e}")))
                    .ok()
            })
            .collect();

        let docs = wire
            .docs
            .into_iter()
            .enumerate()
            .filter_map(|(i, raw)| {
                serde_json::from_value::<DocEntity>(raw)
                    .map_err(|e| rejected_records.push(format!("doc #{i}: {e}")))
                    .ok()
            })
            .collect();

        Ok(DecodedMapRequest {
            request: Self {
                project_id: wire.project_id,
                request_id: wire.request_id,
                entities,
                docs,
                entity_ids: wire.entity_ids,
                doc_ids: wire.doc_ids,
                options: wire.options,
            },
            rejected_records,
        })
    }

    /// Validate the request envelope and options
    pub fn validate(&self) -> Result<()> {
        if self.project_id.trim().is_empty() {
            return Err(Error::invalid_argument("project_id is required"));
        }
        self.options.validate()
    }

    /// Entities selected by `entity_ids`, in input order
    pub fn selected_entities(&self) -> Vec<&CodeEntity> {
        select(&self.entities, self.entity_ids.as_deref(), |e| &e.id)
    }

    /// Docs selected by `doc_ids`, in input order
    pub fn selected_docs(&self) -> Vec<&DocEntity> {
        select(&self.docs, self.doc_ids.as_deref(), |d| &d.id)
    }
}

fn select<'a, T>(
    items: &'a [T],
    filter: Option<&[String]>,
    id: impl Fn(&T) -> &String,
) -> Vec<&'a T> {
    match filter {
        Some(ids) => {
            let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
            items
                .iter()
                .filter(|item| wanted.contains(id(item).as_str()))
                .collect()
        }
        None => items.iter().collect(),
    }
}

/// Result message published for every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapResult {
    /// Project of the request
    pub project_id: String,
    /// Ordered mapping edges
    pub mappings: Vec<EntityMapping>,
    /// `false` only when the request itself was invalid
    pub success: bool,
    /// Reason for failure
    #[serde(default)]
    pub error_message: Option<String>,
    /// Wall-clock processing time in seconds
    #[serde(default)]
    pub map_duration: f64,
    /// Entities considered
    #[serde(default)]
    pub entities_processed: usize,
    /// Docs considered
    #[serde(default)]
    pub docs_processed: usize,
    /// Number of mappings returned
    #[serde(default)]
    pub mappings_created: usize,
    /// Correlation id of the request
    #[serde(default)]
    pub request_id: String,
}

impl MapResult {
    /// Successful result; `mappings_created` follows `mappings`
    pub fn success(
        request: &MapRequest,
        mappings: Vec<EntityMapping>,
        entities_processed: usize,
        docs_processed: usize,
    ) -> Self {
        Self {
            project_id: request.project_id.clone(),
            mappings_created: mappings.len(),
            mappings,
            success: true,
            error_message: None,
            map_duration: 0.0,
            entities_processed,
            docs_processed,
            request_id: request.request_id.clone(),
        }
    }

    /// Failed result with no mappings
    pub fn failure(
        project_id: impl Into<String>,
        request_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            mappings: Vec::new(),
            success: false,
            error_message: Some(message.into()),
            map_duration: 0.0,
            entities_processed: 0,
            docs_processed: 0,
            mappings_created: 0,
            request_id: request_id.into(),
        }
    }

    /// Record the processing time
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.map_duration = seconds;
        self
    }
}
