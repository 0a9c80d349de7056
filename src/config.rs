//! Configuration for hosts embedding the geometry engine.
//!
//! Hosts that construct views outside a native hierarchy (tests, previews,
//! server-side layout) pick up defaults from here. Loadable from TOML so a
//! project can ship its conventions as a file:
//!
//! ```toml
//! default-direction = "rtl"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::view::Direction;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Defaults applied to views whose source left a property unstated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeometryConfig {
    /// Direction assigned to views that do not state one
    pub default_direction: Direction,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            default_direction: Direction::Ltr,
        }
    }
}

impl GeometryConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the direction assigned to views that do not state one
    pub fn with_default_direction(mut self, direction: Direction) -> Self {
        self.default_direction = direction;
        self
    }

    /// Parse a configuration from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
