//! Configuration loading and validation for Shopmate.
//!
//! Loads configuration from `shopmate.toml` (or the file named by the
//! `SHOPMATE_CONFIG` environment variable) with defaults for every field.
//! Validates all settings at startup so tools never see nonsense values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The root configuration structure.
///
/// Maps directly to `shopmate.toml`. Every field has a default, so an
/// absent file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shipping estimator settings.
    #[serde(default)]
    pub shipping: ShippingConfig,

    /// Catalog source settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Settings for the shipping estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Flat shipping cost in dollars.
    #[serde(default = "default_base_cost")]
    pub base_cost: f64,

    /// Minimum transit days.
    #[serde(default = "default_min_days")]
    pub min_days: u32,

    /// Maximum transit days.
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            base_cost: default_base_cost(),
            min_days: default_min_days(),
            max_days: default_max_days(),
        }
    }
}

/// Where the catalog data comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a TOML catalog file. When absent, the built-in demo
    /// dataset is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_base_cost() -> f64 {
    5.99
}
fn default_min_days() -> u32 {
    5
}
fn default_max_days() -> u32 {
    7
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// Load configuration: `SHOPMATE_CONFIG` if set, else `./shopmate.toml`
    /// if present, else defaults. Always validated.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var_os("SHOPMATE_CONFIG") {
            Some(path) => Self::load_from(Path::new(&path))?,
            None => {
                let default_path = Path::new("shopmate.toml");
                if default_path.is_file() {
                    Self::load_from(default_path)?
                } else {
                    tracing::debug!("no config file found, using defaults");
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validate all settings. Called on every load path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shipping.base_cost < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "shipping.base_cost must be >= 0, got {}",
                self.shipping.base_cost
            )));
        }
        if self.shipping.min_days == 0 {
            return Err(ConfigError::Invalid(
                "shipping.min_days must be >= 1".into(),
            ));
        }
        if self.shipping.max_days < self.shipping.min_days {
            return Err(ConfigError::Invalid(format!(
                "shipping.max_days ({}) must be >= shipping.min_days ({})",
                self.shipping.max_days, self.shipping.min_days
            )));
        }
        Ok(())
    }
}
