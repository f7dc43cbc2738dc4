//! In-memory record storage for Faultline
//!
//! Two process-lifetime tables (items and users) keyed by integer id. Nothing
//! is persisted; every table starts either empty or with the demo seed set.

pub mod memory;
pub mod repositories;
pub mod seed;

// Re-export core types for convenience
pub use memory::MemoryTable;
pub use repositories::{InMemoryItemRepository, InMemoryRepositoryFactory, InMemoryUserRepository};
pub use seed::{seed_items, seed_users};
