//! Use Cases
//!
//! Application services that implement the interfaces in [`crate::ports::services`].

/// Map request handling
pub mod map_service;

pub use map_service::MapServiceImpl;
