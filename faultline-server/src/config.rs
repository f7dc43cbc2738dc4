//! Server configuration

use faultline_rest_api::{context::DEFAULT_API_VERSION, FaultLimits};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, ConfigResult};

/// Complete server configuration; every section may be omitted from a file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: HttpServerConfig,
    pub api: ApiConfig,
    pub faults: FaultsConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    pub bind_address: SocketAddr,
    pub enable_cors: bool,
    pub enable_request_id: bool,
    pub enable_tracing: bool,
    /// How long in-flight requests may run after a shutdown signal
    pub shutdown_timeout_seconds: u64,
}

/// API surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Version reported by `/` and `/health/detailed`
    pub version: String,
    /// Load the demo items and users at startup
    pub seed_data: bool,
}

/// Fault-injection limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultsConfig {
    pub max_delay_seconds: u64,
    pub max_iterations: u64,
    pub max_memory_mb: u64,
    /// Seed for the failure-injection random source; OS entropy when unset
    pub random_seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `faultline_rest_api=debug`
    pub level: String,
    pub format: LogFormat,
}

/// Console output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8000)),
            enable_cors: true,
            enable_request_id: true,
            enable_tracing: true,
            shutdown_timeout_seconds: 30,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_API_VERSION.to_string(),
            seed_data: true,
        }
    }
}

impl Default for FaultsConfig {
    fn default() -> Self {
        let limits = FaultLimits::default();
        Self {
            max_delay_seconds: limits.max_delay_seconds,
            max_iterations: limits.max_iterations,
            max_memory_mb: limits.max_memory_mb,
            random_seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl FaultsConfig {
    pub fn limits(&self) -> FaultLimits {
        FaultLimits {
            max_delay_seconds: self.max_delay_seconds,
            max_iterations: self.max_iterations,
            max_memory_mb: self.max_memory_mb,
        }
    }
}

impl ServerConfig {
    /// Reject configurations the server cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.faults.max_delay_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "faults.max_delay_seconds must be greater than 0".to_string(),
            ));
        }
        if self.faults.max_iterations == 0 {
            return Err(ConfigError::ValidationError(
                "faults.max_iterations must be greater than 0".to_string(),
            ));
        }
        if self.faults.max_memory_mb == 0 {
            return Err(ConfigError::ValidationError(
                "faults.max_memory_mb must be greater than 0".to_string(),
            ));
        }
        if self.api.version.trim().is_empty() {
            return Err(ConfigError::ValidationError("api.version cannot be empty".to_string()));
        }
        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            ConfigError::ValidationError(format!("logging.level '{}' is not a valid filter: {}", self.logging.level, e))
        })?;

        Ok(())
    }
}
