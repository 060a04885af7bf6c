//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file, workspace
//! config files, then `PAGESMITH_`-prefixed environment variables. The gateway
//! credential and timeout are handed to the gateway as opaque values.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::provider::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT};
use crate::request::{GenerationMode, TargetLanguage};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Environment variable prefix; nested keys use `__`, e.g. `PAGESMITH_GATEWAY__API_KEY`.
pub const ENV_PREFIX: &str = "PAGESMITH";

/// Selects `config/{name}.toml` in the workspace.
pub const ENV_NAME_VAR: &str = "PAGESMITH_ENV";

const MAX_TIMEOUT_SECS: u64 = 600;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagesmithConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub generation: GenerationSettings,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Generative service connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Missing or blank means every live run falls back.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(format!("Invalid endpoint URL: {}", self.endpoint));
        }
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(format!(
                "Timeout must be between 1 and {} seconds, got {}",
                MAX_TIMEOUT_SECS, self.timeout_secs
            ));
        }
        Ok(())
    }
}

/// Defaults for requests built by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    #[serde(default)]
    pub mode: GenerationMode,

    #[serde(default = "default_language")]
    pub default_language: TargetLanguage,
}

fn default_language() -> TargetLanguage {
    TargetLanguage::Ko
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            mode: GenerationMode::default(),
            default_language: default_language(),
        }
    }
}

/// Where saved results live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Defaults to the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolved_path(&self) -> Result<PathBuf, ApiError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => crate::store::default_path(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Gateway(String),
    Storage(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Gateway(msg) => write!(f, "Gateway: {}", msg),
            ValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PagesmithConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.gateway.validate() {
            errors.push(ValidationError::Gateway(e));
        }

        if let Some(path) = &self.storage.path {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::Storage(
                    "Store path cannot be empty".to_string(),
                ));
            }
        }

        if let Err(e) = self.logging.format.parse::<crate::logging::LogFormat>() {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if let Err(e) = self.logging.output.parse::<crate::logging::LogOutput>() {
            errors.push(ValidationError::Logging(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding every error into one [`ApiError::ConfigError`].
    pub fn validated(self) -> Result<Self, ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}
