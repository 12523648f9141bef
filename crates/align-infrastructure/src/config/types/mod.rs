//! Configuration types module

pub mod app;
pub mod cache;
pub mod embedding;
pub mod logging;
pub mod nats;
pub mod worker;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use embedding::EmbeddingConfig;
pub use logging::LoggingConfig;
pub use nats::NatsConfig;
pub use worker::WorkerConfig;
