//! Map Service Use Case
//!
//! Validates a request, applies the id filters, runs the mapping engine and
//! fills in the result bookkeeping.

use std::sync::Arc;
use std::time::Instant;

use align_domain::value_objects::{MapRequest, MapResult};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain_services::MappingEngine;
use crate::ports::services::MapServiceInterface;

/// Map service implementation
#[derive(Debug, Clone)]
pub struct MapServiceImpl {
    engine: Arc<MappingEngine>,
}

impl MapServiceImpl {
    /// Create a new map service around an engine
    pub fn new(engine: Arc<MappingEngine>) -> Self {
        Self { engine }
    }

    /// Engine in use
    pub fn engine(&self) -> &Arc<MappingEngine> {
        &self.engine
    }
}

#[async_trait]
impl MapServiceInterface for MapServiceImpl {
    async fn map(&self, request: &MapRequest) -> MapResult {
        let started = Instant::now();

        if let Err(e) = request.validate() {
            warn!(
                project_id = %request.project_id,
                request_id = %request.request_id,
                error = %e,
                "rejecting invalid map request"
            );
            return MapResult::failure(
                request.project_id.clone(),
                request.request_id.clone(),
                e.to_string(),
            )
            .with_duration(started.elapsed().as_secs_f64());
        }

        let entities = request.selected_entities();
        let docs = request.selected_docs();

        info!(
            project_id = %request.project_id,
            request_id = %request.request_id,
            entities = entities.len(),
            docs = docs.len(),
            use_embeddings = request.options.use_embeddings,
            use_heuristics = request.options.use_heuristics,
            "processing map request"
        );

        let mut mappings = self
            .engine
            .generate_mappings(&entities, &docs, &request.options)
            .await;
        for mapping in &mut mappings {
            mapping.project_id.clone_from(&request.project_id);
        }

        let result = MapResult::success(request, mappings, entities.len(), docs.len())
            .with_duration(started.elapsed().as_secs_f64());

        info!(
            project_id = %result.project_id,
            request_id = %result.request_id,
            mappings = result.mappings_created,
            duration_secs = result.map_duration,
            "map request completed"
        );
        result
    }

    async fn handle_payload(&self, payload: &[u8]) -> MapResult {
        match MapRequest::from_slice(payload) {
            Ok(decoded) => {
                for record in &decoded.rejected_records {
                    warn!(
                        project_id = %decoded.request.project_id,
                        record = %record,
                        "dropping record that failed to decode"
                    );
                }
                self.map(&decoded.request).await
            }
            Err(e) => {
                let (project_id, request_id) = salvage_ids(payload);
                warn!(
                    project_id = %project_id,
                    error = %e,
                    "could not decode map request"
                );
                MapResult::failure(project_id, request_id, format!("invalid request: {e}"))
            }
        }
    }
}

/// Best-effort `project_id` / `request_id` from a payload that failed to decode
fn salvage_ids(payload: &[u8]) -> (String, String) {
    let value: Option<serde_json::Value> = serde_json::from_slice(payload).ok();
    let field = |name: &str| {
        value
            .as_ref()
            .and_then(|v| v.get(name))
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    (field("project_id"), field("request_id"))
}
