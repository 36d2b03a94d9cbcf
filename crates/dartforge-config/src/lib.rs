//! Configuration system for DartForge.
//!
//! Load checkout settings from TOML or YAML files to control how many
//! suggestions are computed and which finishing rule applies.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use dartforge_config::DartsConfig;
//! use dartforge_core::CheckoutType;
//!
//! let config = DartsConfig::from_toml_str(r#"
//!     [checkout]
//!     limit = 3
//!     checkout_type = "straight-out"
//! "#).unwrap();
//!
//! assert_eq!(config.checkout.limit, 3);
//! assert_eq!(config.checkout.max_throws, 3);
//! assert_eq!(config.checkout.checkout_type, CheckoutType::StraightOut);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use dartforge_config::DartsConfig;
//!
//! let config = DartsConfig::load("darts.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use dartforge_core::{CheckinType, CheckoutType};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DartsConfig {
    /// Checkout calculation settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl DartsConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`DartsConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Loads a file by extension: `.yaml`/`.yml` as YAML, anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that the file format cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.checkout.validate()
    }

    /// Sets the number of checkouts to compute.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.checkout.limit = limit;
        self
    }

    /// Sets the maximum number of darts per checkout.
    pub fn with_max_throws(mut self, max_throws: u8) -> Self {
        self.checkout.max_throws = max_throws;
        self
    }

    /// Sets the finishing rule.
    pub fn with_checkout_type(mut self, checkout_type: CheckoutType) -> Self {
        self.checkout.checkout_type = checkout_type;
        self
    }

    /// Sets the opening rule.
    pub fn with_checkin_type(mut self, checkin_type: CheckinType) -> Self {
        self.checkout.checkin_type = checkin_type;
        self
    }
}

/// Checkout calculation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CheckoutConfig {
    /// Maximum number of distinct checkouts to compute.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Maximum number of darts in one checkout.
    #[serde(default = "default_max_throws")]
    pub max_throws: u8,

    /// Finishing rule.
    #[serde(default)]
    pub checkout_type: CheckoutType,

    /// Opening rule.
    #[serde(default)]
    pub checkin_type: CheckinType,
}

fn default_limit() -> usize {
    1
}

fn default_max_throws() -> u8 {
    3
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            max_throws: default_max_throws(),
            checkout_type: CheckoutType::default(),
            checkin_type: CheckinType::default(),
        }
    }
}

impl CheckoutConfig {
    /// Rejects settings under which no checkout could ever be returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::Invalid(
                "checkout.limit must be greater than 0".to_string(),
            ));
        }
        if self.max_throws == 0 {
            return Err(ConfigError::Invalid(
                "checkout.max_throws must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
