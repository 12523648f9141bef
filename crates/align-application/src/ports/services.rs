//! Application Service Port Interfaces
//!
//! Contracts the transport layer programs against.

use align_domain::value_objects::{MapRequest, MapResult};
use async_trait::async_trait;

/// Map Service Interface
///
/// Turns one request into exactly one result. Implementations never fail:
/// invalid input is reported through `success = false` on the result.
#[async_trait]
pub trait MapServiceInterface: Send + Sync {
    /// Map a decoded request
    async fn map(&self, request: &MapRequest) -> MapResult;

    /// Decode a JSON payload and map it
    async fn handle_payload(&self, payload: &[u8]) -> MapResult;
}
