//! Dependency injection context shared by every handler

use faultline_interfaces::{RandomSource, RepositoryFactory};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Version string reported by `/` and `/health/detailed` unless overridden
pub const DEFAULT_API_VERSION: &str = "1.0.0";

/// Upper bounds enforced by the fault-injection endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultLimits {
    pub max_delay_seconds: u64,
    pub max_iterations: u64,
    pub max_memory_mb: u64,
}

impl Default for FaultLimits {
    fn default() -> Self {
        Self {
            max_delay_seconds: 30,
            max_iterations: 100_000_000,
            max_memory_mb: 100,
        }
    }
}

/// Application state handed to handlers through `State<AppContext>`
#[derive(Clone)]
pub struct AppContext {
    pub repositories: Arc<dyn RepositoryFactory>,
    pub random: Arc<dyn RandomSource>,
    pub limits: FaultLimits,
    pub api_version: String,
    started_at: Instant,
}

impl AppContext {
    /// Context with default limits; the uptime clock starts now
    pub fn new(repositories: Arc<dyn RepositoryFactory>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            repositories,
            random,
            limits: FaultLimits::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            started_at: Instant::now(),
        }
    }

    pub fn with_limits(mut self, limits: FaultLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Time since the context was created
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
