//! Wire types for the Faultline API
//!
//! Records stored by the in-memory tables and returned verbatim by the REST
//! layer, plus the pagination primitives shared by the storage and handler
//! crates.

pub mod domain;
pub mod pagination;

// Re-export main types for convenience
pub use domain::{Item, Record, RecordId, User};
pub use pagination::{Page, PageRequest};
