//! Configuration loading: file, then environment, then validation

use std::path::Path;

use crate::config::{LogFormat, ServerConfig};
use crate::error::{ConfigError, ConfigResult};

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with the `FAULTLINE` prefix
    pub fn new() -> Self {
        Self {
            prefix: "FAULTLINE".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// Load a YAML file (JSON when the extension is `.json`) with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<ServerConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let mut config: ServerConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        self.apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from defaults and environment variables only
    pub fn from_env(&self) -> ConfigResult<ServerConfig> {
        let mut config = ServerConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `config_path` when given, otherwise from the environment
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<ServerConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut ServerConfig) -> ConfigResult<()> {
        if let Ok(bind) = self.get_env_var("BIND_ADDRESS") {
            config.server.bind_address = bind
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid BIND_ADDRESS '{}': {}", bind, e)))?;
        }

        if let Ok(level) = self.get_env_var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.logging.format = format
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::EnvError(format!("Invalid LOG_FORMAT: {}", e)))?;
        }

        if let Ok(seed) = self.get_env_var("RANDOM_SEED") {
            let seed: u64 = seed
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid RANDOM_SEED: {}", e)))?;
            config.faults.random_seed = Some(seed);
        }

        if let Ok(seed_data) = self.get_env_var("SEED_DATA") {
            config.api.seed_data = seed_data
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid SEED_DATA: {}", e)))?;
        }

        Ok(())
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Each test uses its own prefix so parallel tests never see each other's variables

    fn write_config(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_yaml_file() {
        let file = write_config(
            ".yaml",
            "server:\n  bind_address: \"0.0.0.0:9000\"\napi:\n  seed_data: false\nfaults:\n  random_seed: 7\n",
        );

        let config = ConfigLoader::with_prefix("FAULTLINE_TEST_YAML").from_file(file.path()).unwrap();
        assert_eq!(config.server.bind_address.to_string(), "0.0.0.0:9000");
        assert!(!config.api.seed_data);
        assert_eq!(config.faults.random_seed, Some(7));
        assert_eq!(config.faults.max_memory_mb, 100);
    }

    #[test]
    fn test_load_json_file() {
        let file = write_config(".json", r#"{"logging": {"level": "debug", "format": "pretty"}}"#);

        let config = ConfigLoader::with_prefix("FAULTLINE_TEST_JSON").from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::with_prefix("FAULTLINE_TEST_MISSING")
            .from_file("/definitely/not/here.yaml")
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileReadError(_)));
    }

    #[test]
    fn test_invalid_file_values_fail_validation() {
        let file = write_config(".yaml", "faults:\n  max_delay_seconds: 0\n");

        let err = ConfigLoader::with_prefix("FAULTLINE_TEST_INVALID")
            .from_file(file.path())
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config(".yaml", "logging:\n  level: warn\n");
        std::env::set_var("FAULTLINE_TEST_ENV_LOG_LEVEL", "debug");
        std::env::set_var("FAULTLINE_TEST_ENV_LOG_FORMAT", "json");
        std::env::set_var("FAULTLINE_TEST_ENV_RANDOM_SEED", "99");
        std::env::set_var("FAULTLINE_TEST_ENV_SEED_DATA", "false");
        std::env::set_var("FAULTLINE_TEST_ENV_BIND_ADDRESS", "127.0.0.1:8123");

        let config = ConfigLoader::with_prefix("FAULTLINE_TEST_ENV").from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.faults.random_seed, Some(99));
        assert!(!config.api.seed_data);
        assert_eq!(config.server.bind_address.port(), 8123);
    }

    #[test]
    fn test_bad_env_value() {
        std::env::set_var("FAULTLINE_TEST_BADENV_RANDOM_SEED", "soon");

        let err = ConfigLoader::with_prefix("FAULTLINE_TEST_BADENV").from_env().unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
        assert!(err.to_string().contains("RANDOM_SEED"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ConfigLoader::with_prefix("FAULTLINE_TEST_DEFAULTS")
            .load(None::<&Path>)
            .unwrap();
        assert_eq!(config.server.bind_address.port(), 8000);
        assert!(config.api.seed_data);
    }
}
