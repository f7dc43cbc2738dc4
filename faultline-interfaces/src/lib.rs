//! # Faultline Interfaces
//!
//! Core traits shared by the storage and REST crates.
//!
//! Handlers only ever see these traits, which keeps them testable against
//! fresh in-memory instances and lets tests pin random outcomes.
//!
//! ## Main Interfaces
//!
//! - [`RepositoryFactory`] - Hands out the item and user repositories
//! - [`RecordRepository`] - Read/create operations common to every table
//! - [`RandomSource`] - Uniform draws used by the fault-injection endpoints

pub mod database;
pub mod random;

// Re-export commonly used types
pub use database::{
    ItemRepository, RecordRepository, Repository, RepositoryFactory, StoreError, StoreResult, UserRepository,
};
pub use random::RandomSource;
