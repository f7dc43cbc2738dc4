//! Query parameters and bodies for the fault-injection endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /slow-endpoint`
#[derive(Debug, Clone, Deserialize)]
pub struct SlowQuery {
    #[serde(default = "default_delay")]
    pub delay: u64,
}

/// `GET /cpu-intensive`
#[derive(Debug, Clone, Deserialize)]
pub struct CpuQuery {
    #[serde(default = "default_iterations")]
    pub iterations: u64,
}

/// `GET /random-error`
#[derive(Debug, Clone, Deserialize)]
pub struct RandomErrorQuery {
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
}

/// `GET /memory-spike`
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryQuery {
    #[serde(default = "default_size_mb")]
    pub size_mb: u64,
}

/// `GET /cascade-failure`
#[derive(Debug, Clone, Deserialize)]
pub struct CascadeQuery {
    #[serde(default = "default_failure_probability")]
    pub failure_probability: f64,
}

fn default_delay() -> u64 {
    2
}

fn default_iterations() -> u64 {
    1_000_000
}

fn default_failure_rate() -> f64 {
    0.3
}

fn default_size_mb() -> u64 {
    10
}

fn default_failure_probability() -> f64 {
    0.5
}

/// Message stamped with the time the work finished
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedMessage {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl TimedMessage {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuResponse {
    pub message: String,
    pub iterations: u64,
    pub result: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomErrorResponse {
    pub message: String,
    pub failure_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryResponse {
    pub message: String,
    pub data_length: usize,
    pub timestamp: DateTime<Utc>,
}
