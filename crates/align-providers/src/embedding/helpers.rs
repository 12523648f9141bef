//! Common helpers for embedding providers

use std::time::Duration;

use reqwest::Client;

use crate::constants::HTTP_REQUEST_TIMEOUT_SECS;

/// Common constructor patterns used by embedding providers
pub mod constructor {
    /// Trim surrounding whitespace from an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Effective base URL: the trimmed configured value, else `default_url`.
    /// A trailing slash is dropped so paths can be appended.
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(default_url)
            .trim_end_matches('/')
            .to_string()
    }
}

/// Timeout configured for the provider, or the HTTP default
pub fn effective_timeout(configured: Option<Duration>) -> Duration {
    configured.unwrap_or(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
}

/// Build the HTTP client shared by a provider instance
pub fn build_http_client(timeout: Duration) -> Result<Client, String> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))
}
