//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads the table through the [`Context`]
//! 2. Calls into [`crate::core`] for lookups or verification
//! 3. Formats and displays output
//!
//! Primary output goes to stdout; diagnostics go through
//! [`crate::ui::output`] to stderr.

mod check;
mod completion;
mod export;
mod get;
mod keys;
mod resolve;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use completion::completion;
pub use export::export;
pub use get::get;
pub use keys::keys;
pub use resolve::{resolve, resolve_keys, Resolution};

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Get { key, format } => get::get(ctx, &key, format.json()),
        Command::Keys { format } => keys::keys(ctx, format.json()),
        Command::Export => export::export(ctx),
        Command::Check => check::check(ctx),
        Command::Resolve {
            keys,
            missing,
            format,
        } => resolve::resolve(ctx, keys, missing, format.json()),
        Command::Completion { shell } => completion::completion(shell),
    }
}
