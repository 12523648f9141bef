//! NATS configuration types

use align_providers::transport::NatsTransportConfig;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_NATS_CLIENT_NAME;

/// NATS configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NatsConfig {
    /// Server URL
    pub url: String,
    /// Subject map requests are consumed from
    pub request_subject: String,
    /// Subject results are published to when a request has no reply subject
    pub result_subject: String,
    /// Queue group shared by all workers
    pub queue_group: String,
    /// Client name reported to the server
    pub client_name: Option<String>,
}

impl Default for NatsConfig {
    fn default() -> Self {
        let transport = NatsTransportConfig::default();
        Self {
            url: transport.url,
            request_subject: transport.request_subject,
            result_subject: transport.result_subject,
            queue_group: transport.queue_group,
            client_name: Some(DEFAULT_NATS_CLIENT_NAME.to_string()),
        }
    }
}

impl NatsConfig {
    /// Transport settings for [`align_providers::transport::NatsMapTransport`]
    pub fn to_transport_config(&self) -> NatsTransportConfig {
        NatsTransportConfig {
            url: self.url.clone(),
            request_subject: self.request_subject.clone(),
            result_subject: self.result_subject.clone(),
            queue_group: self.queue_group.clone(),
            client_name: self.client_name.clone(),
        }
    }
}
