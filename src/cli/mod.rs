//! cli
//!
//! Command-line interface layer for chipmeta.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Merge flags with configuration into a [`Context`]
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Lookups and verification live in [`crate::core`];
//! handlers only decide how to present results and how to treat missing keys.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::{Config, MissingKeyPolicy};
use crate::core::table::ComponentMetadataTable;
use crate::ui::output::{self, Verbosity};

/// Settings shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Table file from `--table`, overriding config
    pub table_override: Option<PathBuf>,
    /// Loaded configuration
    pub config: Config,
}

impl Context {
    /// Context with default configuration and the built-in table.
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            table_override: None,
            config: Config::default(),
        }
    }

    /// Path of the table to load, if not the built-in one.
    pub fn table_path(&self) -> Option<PathBuf> {
        self.table_override
            .clone()
            .or_else(|| self.config.table_path().map(PathBuf::from))
    }

    /// Load the table this invocation works on.
    ///
    /// The built-in table is borrowed; a table file is read and parsed once
    /// per call.
    pub fn table(&self) -> Result<Cow<'static, ComponentMetadataTable>> {
        match self.table_path() {
            Some(path) => {
                output::debug(
                    format!("loading table from {}", path.display()),
                    self.verbosity,
                );
                let json = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read table '{}'", path.display()))?;
                let table = ComponentMetadataTable::from_json(&json)
                    .with_context(|| format!("Failed to load table '{}'", path.display()))?;
                output::debug(format!("loaded {} entries", table.len()), self.verbosity);
                Ok(Cow::Owned(table))
            }
            None => {
                output::debug("using built-in Earl Grey table", self.verbosity);
                Ok(Cow::Borrowed(ComponentMetadataTable::earlgrey()))
            }
        }
    }

    /// Effective missing-key policy, preferring the flag over config.
    pub fn missing_policy(&self, flag: Option<MissingKeyPolicy>) -> MissingKeyPolicy {
        flag.unwrap_or_else(|| self.config.missing_policy())
    }

    /// Whether to emit JSON, preferring `--json`/`--no-json` over config.
    pub fn json(&self, flag: Option<bool>) -> bool {
        flag.unwrap_or_else(|| self.config.json())
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let cwd = std::env::current_dir().ok();
    let loaded =
        Config::load(cli.config.as_deref(), cwd.as_deref()).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    if let Some(path) = loaded.config.user_config_loaded_from() {
        output::debug(format!("user config: {}", path.display()), verbosity);
    }
    if let Some(path) = loaded.config.project_config_loaded_from() {
        output::debug(format!("project config: {}", path.display()), verbosity);
    }

    let ctx = Context {
        verbosity,
        table_override: cli.table,
        config: loaded.config,
    };

    commands::dispatch(cli.command, &ctx)
}
