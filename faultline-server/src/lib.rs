//! Faultline server: configuration loading, logging initialisation and the
//! HTTP server lifecycle around the REST router.

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod startup;

pub use config::{ApiConfig, FaultsConfig, HttpServerConfig, LogFormat, LoggingConfig, ServerConfig};
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use logging::init_logging;
pub use startup::Server;
