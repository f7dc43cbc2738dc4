//! # Faultline REST API
//!
//! HTTP surface of the Faultline service: record CRUD over items and users,
//! health and analytics reads, and a set of endpoints that inject latency,
//! CPU load, memory pressure and failures on request.
//!
//! Handlers receive their dependencies through [`AppContext`], so the same
//! router can be driven by the in-memory store in production and by a
//! deterministic random source in tests.

pub mod app;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod random;

pub use app::{create_rest_app, AppConfig};
pub use context::{AppContext, FaultLimits};
pub use errors::{RestError, RestResult};
pub use random::{FastrandSource, FixedRandomSource};
