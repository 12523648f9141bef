//! # Align - Infrastructure Layer
//!
//! Cross-cutting technical concerns for the mapping worker.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML file, environment) |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`error_ext`] | Context helpers that convert foreign errors into domain errors |
//! | [`bootstrap`] | Composition root that resolves providers and builds the map service |
//! | [`constants`] | File names, environment prefixes and defaults |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
