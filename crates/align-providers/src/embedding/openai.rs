//! OpenAI embedding provider
//!
//! Calls `POST {base_url}/embeddings`, so any server that speaks the OpenAI
//! embeddings protocol can be used by overriding the base URL.

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
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OPENAI_ADA, EMBEDDING_DIMENSION_OPENAI_LARGE,
    EMBEDDING_DIMENSION_OPENAI_SMALL, OPENAI_DEFAULT_BASE_URL, OPENAI_DEFAULT_MODEL,
};
use crate::embedding::helpers::{build_http_client, constructor, effective_timeout};
use crate::utils::{HttpResponseUtils, request_error};

/// Whether `model` accepts the `dimensions` request field
fn supports_dimensions(model: &str) -> bool {
    model.starts_with("text-embedding-3")
}

/// OpenAI embedding provider
///
/// ## Example
///
/// ```rust,no_run
/// use align_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
///     let provider = OpenAIEmbeddingProvider::new(
///         "sk-your-api-key".to_string(),
///         None,
///         "text-embedding-3-small".to_string(),
///         Duration::from_secs(30),
///         client,
///     )
///     .with_dimensions(512);
///     Ok(())
/// }
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: String,
    base_url: String,
    model: String,
    dimensions: Option<usize>,
    timeout: Duration,
    client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a provider; `base_url` defaults to the public OpenAI API
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::get_effective_url(base_url.as_deref(), OPENAI_DEFAULT_BASE_URL),
            model,
            dimensions: None,
            timeout,
            client,
        }
    }

    /// Request vectors of a specific size
    ///
    /// Only text-embedding-3 models can shorten their output; for other models
    /// the size is reported but not sent.
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Model name sent with each request
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, texts: &[String]) -> Value {
        let mut body = json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });
        if let Some(dimensions) = self.dimensions.filter(|_| supports_dimensions(&self.model)) {
            body["dimensions"] = json!(dimensions);
        }
        body
    }

    /// Vectors from a response body, ordered by their `index` field
    fn parse_embeddings(&self, body: &Value, expected: usize) -> Result<Vec<Embedding>> {
        let data = body["data"]
            .as_array()
            .ok_or_else(|| Error::embedding("OpenAI invalid response: missing data array"))?;

        if data.len() != expected {
            return Err(Error::embedding(format!(
                "OpenAI returned {} embeddings for {expected} inputs",
                data.len()
            )));
        }

        let mut indexed = data
            .iter()
            .enumerate()
            .map(|(position, item)| {
                let index = item["index"]
                    .as_u64()
                    .and_then(|i| usize::try_from(i).ok())
                    .unwrap_or(position);
                HttpResponseUtils::parse_vector(&item["embedding"], "OpenAI")
                    .map(|vector| (index, vector))
            })
            .collect::<Result<Vec<_>>>()?;
        indexed.sort_by_key(|(index, _)| *index);

        Ok(indexed
            .into_iter()
            .map(|(_, vector)| Embedding::new(vector, self.model.clone()))
            .collect())
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&self.request_body(texts))
            .send()
            .await
            .map_err(|e| request_error("OpenAI", &e))?;

        let body = HttpResponseUtils::check_and_parse(response, "OpenAI").await?;
        self.parse_embeddings(&body, texts.len())
    }

    fn dimensions(&self) -> usize {
        self.dimensions.unwrap_or(match self.model.as_str() {
            "text-embedding-3-large" => EMBEDDING_DIMENSION_OPENAI_LARGE,
            "text-embedding-ada-002" => EMBEDDING_DIMENSION_OPENAI_ADA,
            _ => EMBEDDING_DIMENSION_OPENAI_SMALL,
        })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

fn openai_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let api_key = config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| "OpenAI requires api_key".to_string())?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string());
    let timeout = effective_timeout(config.timeout);

    let mut provider = OpenAIEmbeddingProvider::new(
        api_key,
        config.base_url.clone(),
        model,
        timeout,
        build_http_client(timeout)?,
    );
    if let Some(dimensions) = config.dimensions {
        provider = provider.with_dimensions(dimensions);
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OPENAI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "openai",
    description: "OpenAI embeddings API (text-embedding-3-small/large, ada-002)",
    factory: openai_factory,
};
