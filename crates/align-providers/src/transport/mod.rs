//! Message Transport
//!
//! Delivers map requests to the worker and carries results back.

#[cfg(feature = "transport-nats")]
pub mod nats;

#[cfg(feature = "transport-nats")]
pub use nats::{InboundRequest, NatsMapTransport, NatsTransportConfig, result_subject};
