//! Error extension utilities
//!
//! Context extension methods that convert foreign errors (figment, TOML,
//! I/O, registry messages) into the domain [`Error`] type.

use align_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use align_infrastructure::error_ext::ErrorContext;
///
/// let content = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read config file: {}", path.display()))?;
///
/// let config: AppConfig = figment.extract().config_context("Invalid configuration")?;
/// ```
pub trait ErrorContext<T> {
    /// Wrap the error as [`Error::Infrastructure`]
    fn context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Like [`ErrorContext::context`], building the message only on failure
    fn with_context<C: fmt::Display, F: FnOnce() -> C>(self, f: F) -> Result<T>;

    /// Wrap the error as [`Error::Io`]
    fn io_context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Wrap the error as [`Error::Configuration`]
    fn config_context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Wrap the error as [`Error::Network`]
    fn network_context<C: fmt::Display>(self, context: C) -> Result<T>;
}

type Source = Box<dyn std::error::Error + Send + Sync>;

fn wrap<T, E>(
    result: std::result::Result<T, E>,
    context: impl FnOnce() -> String,
    build: fn(String, Option<Source>) -> Error,
) -> Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.map_err(|err| build(format!("{}: {err}", context()), Some(Box::new(err))))
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C: fmt::Display>(self, context: C) -> Result<T> {
        wrap(self, || context.to_string(), |message, source| {
            Error::Infrastructure { message, source }
        })
    }

    fn with_context<C: fmt::Display, F: FnOnce() -> C>(self, f: F) -> Result<T> {
        wrap(self, || f().to_string(), |message, source| {
            Error::Infrastructure { message, source }
        })
    }

    fn io_context<C: fmt::Display>(self, context: C) -> Result<T> {
        wrap(self, || context.to_string(), |message, source| Error::Io {
            message,
            source,
        })
    }

    fn config_context<C: fmt::Display>(self, context: C) -> Result<T> {
        wrap(self, || context.to_string(), |message, source| {
            Error::Configuration { message, source }
        })
    }

    fn network_context<C: fmt::Display>(self, context: C) -> Result<T> {
        wrap(self, || context.to_string(), |message, source| {
            Error::Network { message, source }
        })
    }
}

/// Convert a registry resolution message into a configuration error
///
/// Provider factories report failures as plain strings, which carry no
/// `std::error::Error` impl to hang a source on.
pub fn registry_error(kind: &str, message: String) -> Error {
    Error::configuration(format!("Failed to resolve {kind} provider: {message}"))
}
