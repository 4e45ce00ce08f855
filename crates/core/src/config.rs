//! Configuration management for the Careku assistant.
//!
//! This module handles loading and merging configuration from multiple
//! sources:
//! - Environment variables
//! - Command-line flags
//! - Config files (careku.yaml)
//!
//! The resolved values are passed explicitly into the gateway and the
//! assistant at startup; nothing reads process-wide state after load.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Default chat-completion model served by Groq.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default base URL of the Groq OpenAI-compatible API.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default sampling temperature for answers.
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

/// Main application configuration.
///
/// This struct holds all global configuration options that affect
/// CLI behavior across commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Model identifier sent to the completion gateway
    pub model: String,

    /// Base URL of the completion gateway
    pub base_url: String,

    /// API key for the completion gateway
    pub api_key: Option<String>,

    /// Sampling temperature for answer generation
    pub temperature: f32,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    gateway: Option<GatewaySection>,
    logging: Option<LoggingSection>,
}

/// Gateway settings from careku.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GatewaySection {
    model: Option<String>,
    endpoint: Option<String>,
    temperature: Option<f32>,

    /// Name of the environment variable holding the API key
    #[serde(rename = "apiKeyEnv")]
    api_key_env: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `CAREKU_CONFIG`: Path to config file (default: ./careku.yaml)
    /// - `CAREKU_MODEL`: Model identifier
    /// - `CAREKU_ENDPOINT`: Gateway base URL
    /// - `GROQ_API_KEY`: API key for the completion gateway
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(config_file) = std::env::var("CAREKU_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // Load from YAML config file if it exists
        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("careku.yaml"));

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        if let Ok(model) = std::env::var("CAREKU_MODEL") {
            config.model = model;
        }

        if let Ok(endpoint) = std::env::var("CAREKU_ENDPOINT") {
            config.base_url = endpoint;
        }

        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            config.api_key = Some(key);
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(gateway) = config_file.gateway {
            if let Some(model) = gateway.model {
                result.model = model;
            }
            if let Some(endpoint) = gateway.endpoint {
                result.base_url = endpoint;
            }
            if let Some(temperature) = gateway.temperature {
                result.temperature = temperature;
            }
            if let Some(env_var) = gateway.api_key_env {
                if let Ok(key) = std::env::var(&env_var) {
                    result.api_key = Some(key);
                }
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// This method merges command-line flags with the loaded configuration,
    /// giving precedence to CLI flags over environment variables.
    pub fn with_overrides(
        mut self,
        config_file: Option<PathBuf>,
        model: Option<String>,
        temperature: Option<f32>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(temperature) = temperature {
            self.temperature = temperature;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> AppResult<()> {
        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model identifier is empty".to_string()));
        }

        if self.base_url.trim().is_empty() {
            return Err(AppError::Config("Gateway base URL is empty".to_string()));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::Config(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert!(config.api_key.is_none());
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            None,
            Some("llama-3.3-70b-versatile".to_string()),
            Some(0.7),
            None,
            true,
            false,
        );

        assert_eq!(overridden.model, "llama-3.3-70b-versatile");
        assert_eq!(overridden.temperature, 0.7);
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_merge_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "gateway:\n  model: mixtral-8x7b\n  temperature: 0.2\nlogging:\n  level: warn\n  color: false"
        )
        .unwrap();

        let mut config = AppConfig::default();
        let merged = config.merge_yaml(&file.path().to_path_buf()).unwrap();

        assert_eq!(merged.model, "mixtral-8x7b");
        assert_eq!(merged.temperature, 0.2);
        assert_eq!(merged.log_level, Some("warn".to_string()));
        assert!(merged.no_color);
        // Untouched fields keep their defaults
        assert_eq!(merged.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_bad_temperature() {
        let mut config = AppConfig::default();
        config.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = AppConfig::default();
        config.model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
