//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from embedding APIs.

use align_domain::error::{Error, Result};
use reqwest::Response;

/// Format error message for embedding provider
fn embedding_error(provider: &str, context: &str, details: &str) -> Error {
    Error::embedding(format!("{provider} {context}: {details}"))
}

/// Map a transport-level reqwest error to an embedding error
pub(crate) fn request_error(provider: &str, error: &reqwest::Error) -> Error {
    if error.is_timeout() {
        embedding_error(provider, "request", crate::constants::ERROR_MSG_REQUEST_TIMEOUT)
    } else {
        embedding_error(provider, "HTTP request failed", &error.to_string())
    }
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// Every non-2xx status becomes an [`Error::Embedding`]; the status class
    /// is kept in the message for the logs.
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 => embedding_error(provider_name, "authentication failed", &error_text),
                429 => embedding_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => embedding_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => embedding_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| embedding_error(provider_name, "response parse failed", &e.to_string()))
    }

    /// Read a JSON array of numbers as an `f32` vector
    pub fn parse_vector(value: &serde_json::Value, provider_name: &str) -> Result<Vec<f32>> {
        value
            .as_array()
            .ok_or_else(|| embedding_error(provider_name, "invalid response", "missing embedding"))?
            .iter()
            .map(|v| {
                v.as_f64().map(|f| f as f32).ok_or_else(|| {
                    embedding_error(provider_name, "invalid response", "non-numeric component")
                })
            })
            .collect()
    }
}
