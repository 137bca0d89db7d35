//! Configuration management for the `AstroAI` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AstroAiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Root configuration structure for the `AstroAI` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstroAiConfig {
    /// Completion endpoint configuration
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Completion endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// API key for the hosted completion service; absence degrades the
    /// AI reading feature to offline mode for the session
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible completion API
    #[serde(default = "default_completion_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default = "default_completion_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_completion_temperature")]
    pub temperature: f32,
    /// Cap on the requested generation length
    #[serde(default = "default_completion_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_completion_timeout")]
    pub timeout_seconds: u32,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the form and API are served on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_completion_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_completion_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_completion_temperature() -> f32 {
    0.7
}

fn default_completion_max_tokens() -> u32 {
    500
}

fn default_completion_timeout() -> u32 {
    30
}

fn default_server_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_completion_base_url(),
            model: default_completion_model(),
            temperature: default_completion_temperature(),
            max_tokens: default_completion_max_tokens(),
            timeout_seconds: default_completion_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for AstroAiConfig {
    fn default() -> Self {
        Self {
            completion: CompletionConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AstroAiConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with ASTROAI_ prefix
        builder = builder.add_source(
            Environment::with_prefix("ASTROAI")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AstroAiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // The credential may also come from the plain GROQ_API_KEY
        // variable, typically via a .env file
        config.apply_env_credential();

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("astroai").join("config.toml"))
    }

    /// Fall back to the `GROQ_API_KEY` environment variable when no
    /// credential was configured
    pub fn apply_env_credential(&mut self) {
        if self.completion.api_key.is_none() {
            if let Ok(key) = env::var("GROQ_API_KEY") {
                if !key.is_empty() {
                    self.completion.api_key = Some(key);
                }
            }
        }
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.completion.base_url.is_empty() {
            self.completion.base_url = default_completion_base_url();
        }
        if self.completion.model.is_empty() {
            self.completion.model = default_completion_model();
        }
        if self.completion.max_tokens == 0 {
            self.completion.max_tokens = default_completion_max_tokens();
        }
        if self.completion.timeout_seconds == 0 {
            self.completion.timeout_seconds = default_completion_timeout();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the completion credential
    pub fn validate_api_key(&self) -> Result<()> {
        // The key is optional; without it the AI reading runs offline
        if let Some(api_key) = &self.completion.api_key {
            if api_key.is_empty() {
                return Err(AstroAiError::config(
                    "Completion API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(AstroAiError::config(
                    "Completion API key appears to be invalid (too short). Please check your API key."
                ).into());
            }

            if api_key.len() > 200 {
                return Err(AstroAiError::config(
                    "Completion API key appears to be invalid (too long). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.completion.temperature) {
            return Err(
                AstroAiError::config("Completion temperature must be between 0.0 and 2.0").into(),
            );
        }

        if self.completion.max_tokens > 4096 {
            return Err(
                AstroAiError::config("Completion max tokens cannot exceed 4096").into(),
            );
        }

        if self.completion.timeout_seconds > 300 {
            return Err(
                AstroAiError::config("Completion timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AstroAiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AstroAiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.completion.base_url.starts_with("http://")
            && !self.completion.base_url.starts_with("https://")
        {
            return Err(AstroAiError::config(
                "Completion base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AstroAiConfig::default();
        assert_eq!(config.completion.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.completion.model, "llama-3.3-70b-versatile");
        assert_eq!(config.completion.temperature, 0.7);
        assert_eq!(config.completion.max_tokens, 500);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert!(config.completion.api_key.is_none());
    }

    #[test]
    fn test_config_validation_missing_api_key() {
        let config = AstroAiConfig::default();
        // The key is optional; validation passes without it
        assert!(config.validate_api_key().is_ok());
    }

    #[test]
    fn test_config_validation_valid_api_key() {
        let mut config = AstroAiConfig::default();
        config.completion.api_key = Some("valid_api_key_123".to_string());
        assert!(config.validate_api_key().is_ok());
    }

    #[test]
    fn test_config_validation_short_api_key() {
        let mut config = AstroAiConfig::default();
        config.completion.api_key = Some("short".to_string());
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too short"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AstroAiConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = AstroAiConfig::default();
        config.completion.temperature = 3.5; // Invalid - too high
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("temperature must be between")
        );
    }

    #[test]
    fn test_config_validation_bad_base_url() {
        let mut config = AstroAiConfig::default();
        config.completion.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_credential_fallback() {
        // SAFETY: Test environment, setting test values only
        unsafe {
            env::set_var("GROQ_API_KEY", "test_key_from_env");
        }

        let mut config = AstroAiConfig::default();
        config.apply_env_credential();

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("GROQ_API_KEY");
        }

        assert_eq!(
            config.completion.api_key,
            Some("test_key_from_env".to_string())
        );
    }

    #[test]
    fn test_env_credential_does_not_override_configured_key() {
        let mut config = AstroAiConfig::default();
        config.completion.api_key = Some("configured_key_123".to_string());
        config.apply_env_credential();
        assert_eq!(
            config.completion.api_key,
            Some("configured_key_123".to_string())
        );
    }

    #[test]
    fn test_config_path_generation() {
        let path = AstroAiConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("astroai"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_strings() {
        let mut config = AstroAiConfig::default();
        config.completion.base_url = String::new();
        config.completion.model = String::new();
        config.apply_defaults();
        assert_eq!(config.completion.base_url, default_completion_base_url());
        assert_eq!(config.completion.model, default_completion_model());
    }
}
