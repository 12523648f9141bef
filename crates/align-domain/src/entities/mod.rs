//! Domain Entities
//!
//! Records delivered by the upstream code and documentation scanners. The
//! mapping engine reads them; it never mutates or persists them.
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`CodeEntity`] | A named, located unit of source (function, endpoint, type, ...) |
//! | [`DocEntity`] | A documentation file with optional title and ordered headings |

/// Code entities
pub mod code_entity;
/// Documentation entities
pub mod doc_entity;

pub use code_entity::{CodeEntity, EntityKind, Signature};
pub use doc_entity::{DocEntity, Heading};
