//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same file layout is used for both scopes (user and project).
//!
//! # Validation
//!
//! Config values are validated after parsing; unknown fields are rejected
//! at parse time.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;

/// What to do when a requested node key is not in the table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeyPolicy {
    /// Warn and leave the node unannotated
    #[default]
    Skip,
    /// Treat the missing key as a configuration defect and stop
    Error,
}

/// Contents of a config file.
///
/// # Example
///
/// ```toml
/// table = "diagram/metadata.json"
/// missing = "error"
/// json = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// JSON table to use instead of the built-in one.
    ///
    /// Relative paths are resolved against the config file's directory
    /// when loaded.
    pub table: Option<PathBuf>,

    /// Missing-key policy for `resolve`
    pub missing: Option<MissingKeyPolicy>,

    /// Emit JSON output by default
    pub json: Option<bool>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(table) = &self.table {
            if table.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "table path cannot be empty".into(),
                ));
            }
        }
        Ok(())
    }
}
