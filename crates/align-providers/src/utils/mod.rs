//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod http_response;

pub(crate) use http_response::request_error;
pub use http_response::HttpResponseUtils;
