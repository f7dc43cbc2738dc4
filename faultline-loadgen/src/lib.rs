//! # Faultline Load Generator
//!
//! Drives a running Faultline server with a weighted mix of record reads,
//! health probes and fault-injection calls, then reports latency and error
//! statistics.

pub mod metrics;
pub mod runner;
pub mod tasks;

pub use metrics::{LoadMetrics, RequestTracker, TaskCounts};
pub use runner::{LoadConfig, LoadError, LoadGenerator};
pub use tasks::{Task, TaskMix};
