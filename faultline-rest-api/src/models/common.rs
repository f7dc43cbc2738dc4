//! Common API models shared across endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: f64,
}

impl HealthResponse {
    pub fn healthy(uptime: Duration) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            uptime_seconds: uptime.as_secs_f64(),
        }
    }
}

/// Health check response with store statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: f64,
    pub total_items: usize,
    pub total_users: usize,
    pub api_version: String,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Paths advertised by the service root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointIndex {
    pub health: String,
    pub items: String,
    pub users: String,
    pub analytics: String,
}

impl Default for EndpointIndex {
    fn default() -> Self {
        Self {
            health: "/health".to_string(),
            items: "/items".to_string(),
            users: "/users".to_string(),
            analytics: "/analytics/items-summary".to_string(),
        }
    }
}

/// Body served at `/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointIndex,
}
