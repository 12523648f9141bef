//! Ollama embedding provider
//!
//! Talks to a local Ollama server through `/api/embed`, which accepts a list
//! of inputs and answers with one vector per input in the same order.

use std::sync::Arc;
use std::time::Duration;

use align_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use align_domain::error::{Error, Result};
use align_domain::ports::EmbeddingProvider;
use align_domain::value_objects::Embedding;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OLLAMA_DEFAULT, EMBEDDING_DIMENSION_OLLAMA_MINILM,
    EMBEDDING_DIMENSION_OLLAMA_MXBAI, EMBEDDING_DIMENSION_OLLAMA_NOMIC, OLLAMA_DEFAULT_BASE_URL,
    OLLAMA_DEFAULT_MODEL,
};
use crate::embedding::helpers::{build_http_client, constructor, effective_timeout};
use crate::utils::{HttpResponseUtils, request_error};

/// Vector length of the well-known Ollama embedding models
pub fn known_dimensions(model: &str) -> Option<usize> {
    // Tags like `nomic-embed-text:latest` share the base model's size
    let base = model.split(':').next().unwrap_or(model);
    match base {
        "nomic-embed-text" => Some(EMBEDDING_DIMENSION_OLLAMA_NOMIC),
        "all-minilm" => Some(EMBEDDING_DIMENSION_OLLAMA_MINILM),
        "mxbai-embed-large" => Some(EMBEDDING_DIMENSION_OLLAMA_MXBAI),
        _ => None,
    }
}

/// Embeddings from a local Ollama server
pub struct OllamaEmbeddingProvider {
    endpoint: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
    client: Client,
}

impl OllamaEmbeddingProvider {
    /// Create a provider for `model` served at `base_url`
    pub fn new(base_url: String, model: String, timeout: Duration, client: Client) -> Self {
        let base_url = constructor::get_effective_url(Some(&base_url), OLLAMA_DEFAULT_BASE_URL);
        let dimensions = known_dimensions(&model).unwrap_or(EMBEDDING_DIMENSION_OLLAMA_DEFAULT);
        Self {
            endpoint: format!("{base_url}/api/embed"),
            model,
            dimensions,
            timeout,
            client,
        }
    }

    /// Report `dimensions` instead of the model's known size
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Model name sent with each request
    pub fn model(&self) -> &str {
        &self.model
    }

    fn parse_embeddings(&self, body: &Value, expected: usize) -> Result<Vec<Embedding>> {
        let rows = body["embeddings"].as_array().ok_or_else(|| {
            let reason = body["error"].as_str().unwrap_or("missing embeddings");
            Error::embedding(format!("Ollama invalid response: {reason}"))
        })?;

        if rows.len() != expected {
            return Err(Error::embedding(format!(
                "Ollama returned {} embeddings for {expected} inputs",
                rows.len()
            )));
        }

        rows.iter()
            .map(|row| {
                HttpResponseUtils::parse_vector(row, "Ollama")
                    .map(|vector| Embedding::new(vector, self.model.clone()))
            })
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&json!({ "model": self.model, "input": texts }))
            .send()
            .await
            .map_err(|e| request_error("Ollama", &e))?;

        let body = HttpResponseUtils::check_and_parse(response, "Ollama").await?;
        self.parse_embeddings(&body, texts.len())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

fn ollama_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OLLAMA_DEFAULT_MODEL.to_string());
    let base_url = config.base_url.clone().unwrap_or_default();
    let timeout = effective_timeout(config.timeout);

    let mut provider =
        OllamaEmbeddingProvider::new(base_url, model, timeout, build_http_client(timeout)?);
    if let Some(dimensions) = config.dimensions {
        provider = provider.with_dimensions(dimensions);
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OLLAMA_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "ollama",
    description: "Local Ollama server (nomic-embed-text, all-minilm, mxbai-embed-large)",
    factory: ollama_factory,
};
