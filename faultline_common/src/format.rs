//! Separators used when composing an error-codes vector.
//!
//! The default format renders trees as
//! `ErrorA -> ErrorB -> [ErrorC -> ErrorD, ErrorG]`.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::{
    DEFAULT_CHAIN_SEPARATOR, DEFAULT_GROUP_CLOSE, DEFAULT_GROUP_OPEN, DEFAULT_SIBLING_SEPARATOR,
};

/// Separators for rendering an error-codes vector.
///
/// # TOML Example
///
/// ```toml
/// [vector]
/// chain_separator = " => "
/// sibling_separator = " | "
/// group_open = "{"
/// group_close = "}"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VectorFormat {
    /// Placed between a node's own code and the summary of its causes.
    pub chain_separator: String,

    /// Placed between sibling summaries inside a group.
    pub sibling_separator: String,

    /// Opens a group of two or more sibling summaries.
    pub group_open: String,

    /// Closes a group of two or more sibling summaries.
    pub group_close: String,
}

impl Default for VectorFormat {
    fn default() -> Self {
        Self {
            chain_separator: DEFAULT_CHAIN_SEPARATOR.to_string(),
            sibling_separator: DEFAULT_SIBLING_SEPARATOR.to_string(),
            group_open: DEFAULT_GROUP_OPEN.to_string(),
            group_close: DEFAULT_GROUP_CLOSE.to_string(),
        }
    }
}

impl VectorFormat {
    /// Validate the format.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `chain_separator` or `sibling_separator` is empty
    /// - exactly one of `group_open` / `group_close` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "vector.chain_separator cannot be empty".to_string(),
            ));
        }
        if self.sibling_separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "vector.sibling_separator cannot be empty".to_string(),
            ));
        }
        if self.group_open.is_empty() != self.group_close.is_empty() {
            return Err(ConfigError::ValidationError(
                "vector.group_open and vector.group_close must both be set or both be empty"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
