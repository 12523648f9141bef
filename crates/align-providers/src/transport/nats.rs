//! NATS Map Transport
//!
//! Receives map requests from a NATS queue group and publishes results.
//!
//! Requests arrive on `align.map` (queue group `map-workers`, so each request
//! is delivered to one worker). A result goes to the request's reply subject
//! when it has one, otherwise to `align.map.result`.
//!
//! ## Example
//!
//! ```ignore
//! use align_providers::transport::{NatsMapTransport, NatsTransportConfig};
//!
//! let transport = NatsMapTransport::connect(NatsTransportConfig::default()).await?;
//! let mut requests = transport.requests().await?;
//! while let Some(request) = requests.next().await {
//!     let result = service.handle_payload(&request.payload).await;
//!     transport.publish_result(request.reply.as_deref(), &result).await?;
//! }
//! ```

use align_domain::error::{Error, Result};
use align_domain::value_objects::MapResult;
use async_nats::Client;
use futures::StreamExt;
use futures::stream::BoxStream;
use tracing::{debug, info};

use crate::constants::{
    NATS_DEFAULT_QUEUE_GROUP, NATS_DEFAULT_REQUEST_SUBJECT, NATS_DEFAULT_RESULT_SUBJECT,
    NATS_DEFAULT_URL,
};

/// Connection and routing settings for [`NatsMapTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatsTransportConfig {
    /// NATS server URL
    pub url: String,
    /// Subject requests are consumed from
    pub request_subject: String,
    /// Subject results go to when a request has no reply subject
    pub result_subject: String,
    /// Queue group shared by all workers
    pub queue_group: String,
    /// Client name reported to the server
    pub client_name: Option<String>,
}

impl Default for NatsTransportConfig {
    fn default() -> Self {
        Self {
            url: NATS_DEFAULT_URL.to_string(),
            request_subject: NATS_DEFAULT_REQUEST_SUBJECT.to_string(),
            result_subject: NATS_DEFAULT_RESULT_SUBJECT.to_string(),
            queue_group: NATS_DEFAULT_QUEUE_GROUP.to_string(),
            client_name: None,
        }
    }
}

/// One request message taken off the queue
#[derive(Debug, Clone)]
pub struct InboundRequest {
    /// Raw JSON payload
    pub payload: Vec<u8>,
    /// Reply subject set by the sender, if any
    pub reply: Option<String>,
}

/// Request/result transport over NATS
pub struct NatsMapTransport {
    client: Client,
    config: NatsTransportConfig,
}

impl NatsMapTransport {
    /// Connect to the configured server
    ///
    /// # Errors
    ///
    /// Returns an error if connection to NATS server fails.
    pub async fn connect(config: NatsTransportConfig) -> Result<Self> {
        info!(url = %config.url, "connecting to NATS server");

        let mut options = async_nats::ConnectOptions::new();
        if let Some(name) = &config.client_name {
            options = options.name(name);
        }

        let client = options.connect(config.url.as_str()).await.map_err(|e| {
            Error::network(format!(
                "Failed to connect to NATS server at {}: {}",
                config.url, e
            ))
        })?;

        info!(url = %config.url, "connected to NATS server");
        Ok(Self { client, config })
    }

    /// Settings in use
    pub fn config(&self) -> &NatsTransportConfig {
        &self.config
    }

    /// Subscribe to the request subject as a member of the queue group
    pub async fn requests(&self) -> Result<BoxStream<'static, InboundRequest>> {
        let subscriber = self
            .client
            .queue_subscribe(
                self.config.request_subject.clone(),
                self.config.queue_group.clone(),
            )
            .await
            .map_err(|e| {
                Error::network(format!(
                    "Failed to subscribe to NATS subject '{}': {}",
                    self.config.request_subject, e
                ))
            })?;

        info!(
            subject = %self.config.request_subject,
            queue_group = %self.config.queue_group,
            "subscribed to map requests"
        );

        Ok(subscriber
            .map(|message| InboundRequest {
                payload: message.payload.to_vec(),
                reply: message.reply.map(|subject| subject.to_string()),
            })
            .boxed())
    }

    /// Subject a result for a request with `reply` is published on
    pub fn result_subject_for<'a>(&'a self, reply: Option<&'a str>) -> &'a str {
        result_subject(reply, &self.config.result_subject)
    }

    /// Serialize and publish a result
    pub async fn publish_result(&self, reply: Option<&str>, result: &MapResult) -> Result<()> {
        let payload = serde_json::to_vec(result)?;
        let subject = self.result_subject_for(reply).to_string();

        self.client
            .publish(subject.clone(), payload.into())
            .await
            .map_err(|e| {
                Error::network(format!(
                    "Failed to publish to NATS subject '{subject}': {e}"
                ))
            })?;

        debug!(subject = %subject, request_id = %result.request_id, "published map result");
        Ok(())
    }

    /// Flush buffered publishes
    pub async fn flush(&self) -> Result<()> {
        self.client
            .flush()
            .await
            .map_err(|e| Error::network(format!("Failed to flush NATS client: {e}")))
    }
}

impl std::fmt::Debug for NatsMapTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NatsMapTransport")
            .field("config", &self.config)
            .finish()
    }
}

/// Reply subject when present and non-empty, else `default`
pub fn result_subject<'a>(reply: Option<&'a str>, default: &'a str) -> &'a str {
    reply.filter(|subject| !subject.is_empty()).unwrap_or(default)
}
