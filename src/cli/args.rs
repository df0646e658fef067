//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--table <path>`: Use a JSON table instead of the built-in one
//! - `--config <path>`: Use this user config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::config::MissingKeyPolicy;

/// chipmeta - Metadata lookup for hardware block diagram nodes
#[derive(Parser, Debug)]
#[command(name = "chipmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load the metadata table from this JSON file
    #[arg(long, global = true, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the metadata for one diagram node
    #[command(
        name = "get",
        long_about = "Show the metadata recorded for one diagram node.\n\n\
            Prints the node's title, metrics identifier, link target and \
            verification report path. Fields that do not apply to the node \
            are shown as '-' (or null in JSON).",
        after_help = "\
EXAMPLES:
    chipmeta get ibex
    chipmeta get opentitan-logo --json"
    )]
    Get {
        /// Node key, as referenced by the diagram
        key: String,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// List all node keys in table order
    Keys {
        #[command(flatten)]
        format: FormatArgs,
    },

    /// Print the whole table as JSON
    Export,

    /// Verify the table and print its fingerprint
    #[command(
        name = "check",
        long_about = "Verify the structure of the metadata table.\n\n\
            Flags empty strings in optional fields and links that are neither \
            site-absolute paths nor http(s) URLs. Link targets are not fetched. \
            On success prints the entry count and the table fingerprint."
    )]
    Check,

    /// Look up many node keys at once
    #[command(
        name = "resolve",
        long_about = "Look up metadata for a batch of diagram nodes.\n\n\
            Keys are taken from the arguments or, when none are given, from \
            stdin (one per line). With --missing skip, unknown keys are reported \
            and left out; with --missing error the first unknown key aborts.",
        after_help = "\
EXAMPLES:
    chipmeta resolve ibex aes flash
    grep -o 'id=\"[a-z0-9-]*\"' diagram.svg | cut -d'\"' -f2 | chipmeta resolve --json"
    )]
    Resolve {
        /// Node keys (read from stdin if omitted)
        keys: Vec<String>,

        /// What to do with keys missing from the table
        #[arg(long, value_enum)]
        missing: Option<MissingKeyPolicy>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format flags shared by the lookup commands.
///
/// Without either flag the `json` config value decides.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct FormatArgs {
    /// Output as JSON
    #[arg(long, overrides_with = "no_json")]
    json: bool,

    /// Output as text, even if config enables JSON
    #[arg(long, overrides_with = "json")]
    no_json: bool,
}

impl FormatArgs {
    /// The format requested on the command line, if any.
    pub fn json(&self) -> Option<bool> {
        match (self.json, self.no_json) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
