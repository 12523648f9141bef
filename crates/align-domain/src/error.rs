//! Error type shared by every Align crate
//!
//! Variants that wrap a foreign error keep it as `source` so the chain
//! survives into logs.

use thiserror::Error;

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while mapping, configuring or transporting requests
#[derive(Error, Debug)]
pub enum Error {
    /// File system failure, with what was being attempted
    #[error("I/O error: {message}")]
    Io {
        /// What failed
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Payload is not valid JSON or does not match the message schema
    #[error("JSON parsing error: {source}")]
    Json {
        /// Underlying error
        #[from]
        source: serde_json::Error,
    },

    /// Request field or record that breaks an input rule
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Which rule was broken
        message: String,
    },

    /// Embedding provider call failed or answered with something unusable
    #[error("Embedding provider error: {message}")]
    Embedding {
        /// Provider name and failure
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Broker connection, subscription or publish failure
    #[error("Network error: {message}")]
    Network {
        /// What failed
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Failure in runtime wiring outside the categories above
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// What failed
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A value that should be impossible, such as a non-finite score
    #[error("Internal error: {message}")]
    Internal {
        /// What was observed
        message: String,
    },
}

impl Error {
    /// Invalid request field or record
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Embedding provider failure
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Broken internal invariant
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Configuration problem without an underlying error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Configuration problem caused by `source`
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Broker or connection failure
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Whether the error was caused by the request's content rather than by
    /// the runtime
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::Json { .. })
    }
}
