//! # Align
//!
//! Maps code entities (functions, endpoints, types) to the documentation that
//! describes them. Each edge carries a blended score, a relation tier and a
//! confidence tier derived from lexical heuristics and embedding similarity.
//!
//! The `align` binary runs a worker that consumes map requests from a NATS
//! queue group and publishes one result per request.
//!
//! ## Example
//!
//! ```ignore
//! use align::infrastructure::{AppConfig, init_app};
//! use align::domain::MapRequest;
//!
//! let context = init_app(AppConfig::default())?;
//! let result = context.map_service().map(&MapRequest::new("proj", entities, docs)).await;
//! ```

/// Domain layer - entities, value objects and errors
pub mod domain {
    pub use align_domain::*;
}

/// Application layer - scoring, mapping engine and map service
pub mod application {
    pub use align_application::*;
}

/// Infrastructure layer - configuration, logging and wiring
pub mod infrastructure {
    pub use align_infrastructure::*;
}

pub mod init;
pub mod worker;

pub use init::run;
pub use worker::{MapWorker, ResultPublisher};
