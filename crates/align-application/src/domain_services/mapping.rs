//! Mapping Engine
//!
//! Scores every (entity, doc) pair, keeps the pairs above the threshold and
//! returns at most `max_mappings_per_entity` edges per entity, best first.
//! Each entity is ranked independently and every entity is processed.

use std::borrow::Borrow;
use std::sync::Arc;

use align_domain::constants::{BLEND_EMBEDDING_WEIGHT, BLEND_HEURISTICS_WEIGHT};
use align_domain::entities::{CodeEntity, DocEntity, Heading};
use align_domain::error::{Error, Result};
use align_domain::value_objects::{
    Confidence, EntityMapping, MapOptions, MappingMetadata, Relation, cosine_similarity,
    similarity_to_unit,
};
use tracing::{debug, warn};

use super::embedding::EmbeddingService;
use super::heuristics::HeuristicScorer;

/// Combine the component scores according to which scorers are enabled
///
/// | heuristics | embeddings | score |
/// |------------|------------|-------|
/// | on | on | `0.6 h + 0.4 e` |
/// | on | off | `h` |
/// | off | on | `e` |
/// | off | off | `0.0` |
pub fn blend_scores(heuristics: Option<f64>, embedding: Option<f64>) -> f64 {
    match (heuristics, embedding) {
        (Some(h), Some(e)) => BLEND_HEURISTICS_WEIGHT * h + BLEND_EMBEDDING_WEIGHT * e,
        (Some(h), None) => h,
        (None, Some(e)) => e,
        (None, None) => 0.0,
    }
}

/// Anchor of the first heading whose text contains `name`, ignoring case
pub fn find_anchor(name: &str, headings: &[Heading]) -> Option<String> {
    let needle = name.to_lowercase();
    headings
        .iter()
        .find(|heading| heading.text.to_lowercase().contains(&needle))
        .and_then(|heading| heading.anchor.clone())
}

/// Produces ranked entity-to-doc edges
#[derive(Debug, Clone)]
pub struct MappingEngine {
    embeddings: Arc<EmbeddingService>,
    heuristics: HeuristicScorer,
}

impl MappingEngine {
    /// Create an engine with the standard heuristic weights
    pub fn new(embeddings: Arc<EmbeddingService>) -> Self {
        Self {
            embeddings,
            heuristics: HeuristicScorer::new(),
        }
    }

    /// Replace the heuristic scorer
    pub fn with_heuristics(mut self, heuristics: HeuristicScorer) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Embedding service in use
    pub fn embeddings(&self) -> &Arc<EmbeddingService> {
        &self.embeddings
    }

    /// Map every entity against every doc
    ///
    /// Output is grouped by entity in input order; within an entity, edges are
    /// sorted by score descending with ties kept in doc input order.
    /// Malformed records and pairs that cannot be scored are logged and
    /// skipped.
    pub async fn generate_mappings<E, D>(
        &self,
        entities: &[E],
        docs: &[D],
        options: &MapOptions,
    ) -> Vec<EntityMapping>
    where
        E: Borrow<CodeEntity> + Sync,
        D: Borrow<DocEntity> + Sync,
    {
        if !options.use_embeddings && !options.use_heuristics {
            debug!("both scorers disabled, no mappings produced");
            return Vec::new();
        }

        let entities: Vec<&CodeEntity> = entities
            .iter()
            .map(Borrow::borrow)
            .filter(|entity| match entity.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(entity_id = %entity.id, error = %e, "skipping malformed code entity");
                    false
                }
            })
            .collect();

        let docs: Vec<&DocEntity> = docs
            .iter()
            .map(Borrow::borrow)
            .filter(|doc| match doc.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(doc_id = %doc.id, error = %e, "skipping malformed doc entity");
                    false
                }
            })
            .collect();

        let vectors = if options.use_embeddings {
            Some(self.prepare_vectors(&entities, &docs).await)
        } else {
            None
        };

        let mut mappings = Vec::new();
        for (i, entity) in entities.iter().enumerate() {
            let mut entity_mappings = Vec::new();

            for (j, doc) in docs.iter().enumerate() {
                let pair_vectors = vectors
                    .as_ref()
                    .map(|(ev, dv)| (ev[i].as_slice(), dv[j].as_slice()));

                match self.score_pair(entity, doc, pair_vectors, options) {
                    Ok(Some(mapping)) => entity_mappings.push(mapping),
                    Ok(None) => {}
                    Err(e) => warn!(
                        entity_id = %entity.id,
                        doc_id = %doc.id,
                        error = %e,
                        "skipping pair that could not be scored"
                    ),
                }
            }

            // sort_by is stable: equal scores keep doc input order
            entity_mappings.sort_by(|a, b| b.score.total_cmp(&a.score));
            entity_mappings.truncate(options.max_mappings_per_entity);
            mappings.extend(entity_mappings);
        }

        debug!(
            entities = entities.len(),
            docs = docs.len(),
            mappings = mappings.len(),
            "generated mappings"
        );
        mappings
    }

    /// Score a single pair; `Ok(None)` when it falls below the threshold
    fn score_pair(
        &self,
        entity: &CodeEntity,
        doc: &DocEntity,
        vectors: Option<(&[f32], &[f32])>,
        options: &MapOptions,
    ) -> Result<Option<EntityMapping>> {
        let embedding_score = match vectors {
            Some((entity_vector, doc_vector)) => Some(similarity_to_unit(cosine_similarity(
                entity_vector,
                doc_vector,
            )?)),
            None => None,
        };

        let heuristics_score = options
            .use_heuristics
            .then(|| self.heuristics.score(entity, doc).score);

        let score = blend_scores(heuristics_score, embedding_score);
        if !score.is_finite() {
            return Err(Error::internal(format!("non-finite score {score}")));
        }
        if score < options.min_score_threshold {
            return Ok(None);
        }

        let heuristics_score = heuristics_score.unwrap_or(0.0);

        Ok(Some(EntityMapping {
            id: EntityMapping::mapping_id(&entity.id, &doc.id),
            project_id: entity.project_id.clone().unwrap_or_default(),
            entity_id: entity.id.clone(),
            doc_id: doc.id.clone(),
            anchor: find_anchor(&entity.name, &doc.headings),
            score,
            relation: Relation::from_score(score),
            confidence: Confidence::from_score(heuristics_score),
            heuristics_score,
            embedding_score: embedding_score.unwrap_or(0.0),
            manual_override: false,
            metadata: MappingMetadata {
                entity_kind: entity.kind.to_string(),
                entity_lang: entity.lang.clone(),
                doc_title: doc.title.clone(),
            },
        }))
    }

    /// Resolve one vector per entity and per doc
    ///
    /// Pre-computed vectors of the service's dimensionality are used as-is.
    /// Every other record, including one whose stored vector has the wrong
    /// length, is embedded once per distinct text.
    async fn prepare_vectors(
        &self,
        entities: &[&CodeEntity],
        docs: &[&DocEntity],
    ) -> (Vec<Vec<f32>>, Vec<Vec<f32>>) {
        let dimensions = self.embeddings.dimensions();

        let entity_stored: Vec<Option<&[f32]>> = entities
            .iter()
            .map(|e| precomputed(&e.id, e.embedding.as_deref(), dimensions))
            .collect();
        let doc_stored: Vec<Option<&[f32]>> = docs
            .iter()
            .map(|d| precomputed(&d.id, d.embedding.as_deref(), dimensions))
            .collect();

        let entity_texts: Vec<Option<String>> = entities
            .iter()
            .zip(&entity_stored)
            .map(|(e, stored)| stored.is_none().then(|| e.embedding_text()))
            .collect();
        let doc_texts: Vec<Option<String>> = docs
            .iter()
            .zip(&doc_stored)
            .map(|(d, stored)| stored.is_none().then(|| d.embedding_text()))
            .collect();

        let pending: Vec<String> = entity_texts
            .iter()
            .chain(&doc_texts)
            .flatten()
            .cloned()
            .collect();
        let generated = self.embeddings.embed_all(pending).await;

        let resolve = |stored: Option<&[f32]>, text: &Option<String>| -> Vec<f32> {
            match (stored, text) {
                (Some(vector), _) => vector.to_vec(),
                (None, Some(text)) => generated
                    .get(text)
                    .map(|embedding| embedding.vector.clone())
                    .unwrap_or_default(),
                (None, None) => Vec::new(),
            }
        };

        let entity_vectors = entity_stored
            .iter()
            .zip(&entity_texts)
            .map(|(stored, text)| resolve(*stored, text))
            .collect();
        let doc_vectors = doc_stored
            .iter()
            .zip(&doc_texts)
            .map(|(stored, text)| resolve(*stored, text))
            .collect();

        (entity_vectors, doc_vectors)
    }
}

/// Stored vector of a record, if it can be compared with generated ones
fn precomputed<'a>(
    id: &str,
    embedding: Option<&'a [f32]>,
    dimensions: usize,
) -> Option<&'a [f32]> {
    match embedding {
        Some(vector) if vector.len() == dimensions => Some(vector),
        Some(vector) if !vector.is_empty() => {
            warn!(
                record_id = %id,
                expected = dimensions,
                actual = vector.len(),
                "ignoring stored embedding with unexpected dimensions"
            );
            None
        }
        _ => None,
    }
}
