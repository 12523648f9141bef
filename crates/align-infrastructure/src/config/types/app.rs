//! Root configuration type

use serde::{Deserialize, Serialize};

use super::{CacheConfig, EmbeddingConfig, LoggingConfig, NatsConfig, WorkerConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Embedding provider selection and call limits
    pub embedding: EmbeddingConfig,
    /// Embedding cache configuration
    pub cache: CacheConfig,
    /// NATS connection and subjects
    pub nats: NatsConfig,
    /// Message processing limits
    pub worker: WorkerConfig,
}
