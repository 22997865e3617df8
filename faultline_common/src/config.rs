//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load the TOML configuration
//! that controls how error-codes vectors are rendered.
//!
//! # Usage
//!
//! ```rust,no_run
//! use faultline_common::config::{ConfigError, ConfigLoader, FaultlineConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = FaultlineConfig::load_validated(Path::new("faultline.toml"))?;
//!     println!("chain separator: {:?}", config.vector.chain_separator);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::format::VectorFormat;

/// Error type for configuration loading operations.
///
/// This enum represents all possible errors that can occur when loading
/// configuration files.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Top-level faultline configuration.
///
/// Every section is optional; a missing section takes its defaults.
///
/// # TOML Example
///
/// ```toml
/// [vector]
/// chain_separator = " -> "
/// sibling_separator = ", "
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaultlineConfig {
    /// Vector rendering separators.
    #[serde(default)]
    pub vector: VectorFormat,
}

impl FaultlineConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if any section is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vector.validate()
    }

    /// Load the configuration from a TOML file and validate it.
    pub fn load_validated(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }
}

/// Trait for loading configuration from TOML files.
///
/// This trait provides a default implementation that works with any type
/// implementing `serde::de::DeserializeOwned`.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Any serde-deserializable struct can be loaded.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FaultlineConfig::parse("").unwrap();
        assert_eq!(config, FaultlineConfig::default());
        assert_eq!(config.vector, VectorFormat::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = FaultlineConfig::parse(
            r#"
[vector]
chain_separator = " => "
"#,
        )
        .unwrap();
        assert_eq!(config.vector.chain_separator, " => ");
        assert_eq!(config.vector.sibling_separator, ", ");
        assert_eq!(config.vector.group_open, "[");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = FaultlineConfig::parse(
            r#"
[vector]
arrow = "=>"
"#,
        );
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_loader_file_not_found() {
        let result = FaultlineConfig::load(Path::new("/nonexistent/path/faultline.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound)));
    }

    #[test]
    fn test_config_loader_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid toml {{{{").unwrap();

        let result = FaultlineConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_validated_rejects_empty_separator() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[vector]
sibling_separator = ""
"#
        )
        .unwrap();
        file.flush().unwrap();

        let result = FaultlineConfig::load_validated(file.path());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_config_loader_success() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[vector]
chain_separator = " => "
sibling_separator = " | "
group_open = "{{"
group_close = "}}"
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = FaultlineConfig::load_validated(file.path()).unwrap();
        assert_eq!(config.vector.chain_separator, " => ");
        assert_eq!(config.vector.sibling_separator, " | ");
        assert_eq!(config.vector.group_open, "{");
        assert_eq!(config.vector.group_close, "}");
    }
}
