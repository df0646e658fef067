//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! chipmeta has two configuration scopes:
//! - **User**: personal defaults
//! - **Project**: `.chipmeta.toml` in the working directory
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. User config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # User Config Locations
//!
//! Searched in order:
//! 1. An explicit path (the `--config` flag), which must exist
//! 2. `$CHIPMETA_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/chipmeta/config.toml`
//! 4. `~/.chipmeta/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use chipmeta::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(None, Some(Path::new("."))).unwrap();
//! let config = result.config;
//!
//! if let Some(table) = config.table_path() {
//!     println!("Table: {}", table.display());
//! }
//! println!("Missing keys: {:?}", config.missing_policy());
//! ```

pub mod schema;

pub use schema::{FileConfig, MissingKeyPolicy};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a user config file.
pub const CONFIG_ENV: &str = "CHIPMETA_CONFIG";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = ".chipmeta.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence automatically: project config overrides
/// user config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// User configuration
    pub user: FileConfig,
    /// Project configuration (if present)
    pub project: Option<FileConfig>,
    /// Path to the user config file (if loaded)
    user_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// `explicit` names a user config file that must exist. Otherwise the
    /// standard locations are searched. If `project_dir` is provided, its
    /// `.chipmeta.toml` is loaded as well.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or
    /// parsed, or if `explicit` does not exist. Missing files in standard
    /// locations are not an error (defaults are used).
    pub fn load(
        explicit: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (user, user_path) = match explicit {
            Some(path) => (Self::read_config(path)?, Some(path.to_path_buf())),
            None => Self::load_user(&mut warnings)?,
        };

        let (project, project_path) = match project_dir {
            Some(dir) => {
                let path = dir.join(PROJECT_CONFIG_FILE);
                if path.exists() {
                    (Some(Self::read_config(&path)?), Some(path))
                } else {
                    (None, None)
                }
            }
            None => (None, None),
        };

        user.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                user,
                project,
                user_path,
                project_path,
            },
            warnings,
        })
    }

    /// Load user configuration from standard locations.
    fn load_user(
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(FileConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $CHIPMETA_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
            warnings.push(ConfigWarning {
                message: format!("${CONFIG_ENV} points to a missing file, ignoring it"),
                path,
            });
        }

        // 2. Check $XDG_CONFIG_HOME/chipmeta/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("chipmeta/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.chipmeta/config.toml
        if let Ok(path) = Self::user_config_path() {
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((FileConfig::default(), None))
    }

    /// Read and parse a config file, resolving `table` against its directory.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: FileConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if let (Some(table), Some(dir)) = (config.table.as_mut(), path.parent()) {
            if table.is_relative() && !table.as_os_str().is_empty() {
                *table = dir.join(&*table);
            }
        }

        Ok(config)
    }

    /// Get the canonical path for user config.
    ///
    /// Returns `~/.chipmeta/config.toml`.
    pub fn user_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".chipmeta/config.toml"))
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// JSON table to load instead of the built-in one.
    ///
    /// Returns `None` if not configured.
    pub fn table_path(&self) -> Option<&Path> {
        self.project
            .as_ref()
            .and_then(|p| p.table.as_deref())
            .or(self.user.table.as_deref())
    }

    /// Missing-key policy for batch resolution.
    ///
    /// Defaults to [`MissingKeyPolicy::Skip`] if not configured.
    pub fn missing_policy(&self) -> MissingKeyPolicy {
        self.project
            .as_ref()
            .and_then(|p| p.missing)
            .or(self.user.missing)
            .unwrap_or_default()
    }

    /// Whether output defaults to JSON.
    ///
    /// Defaults to `false` if not configured.
    pub fn json(&self) -> bool {
        self.project
            .as_ref()
            .and_then(|p| p.json)
            .or(self.user.json)
            .unwrap_or(false)
    }

    /// Path the user config was loaded from.
    pub fn user_config_loaded_from(&self) -> Option<&Path> {
        self.user_path.as_deref()
    }

    /// Path the project config was loaded from.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
