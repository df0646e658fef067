//! resolve command - Look up many node keys at once

use std::collections::HashSet;
use std::io::BufRead;

use crate::cli::Context;
use crate::core::config::MissingKeyPolicy;
use crate::core::table::{ComponentMetadataTable, TableError};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Outcome of resolving a batch of keys.
#[derive(Debug)]
pub struct Resolution {
    /// Found entries, in first-requested order, without repeats.
    pub found: ComponentMetadataTable,
    /// Requested keys that are not in the table, in request order.
    pub missing: Vec<String>,
}

/// Resolve `keys` against `table`.
///
/// Repeated keys are resolved once. Under [`MissingKeyPolicy::Error`] the
/// first unknown key fails the whole batch.
///
/// # Errors
///
/// Returns `TableError::KeyNotFound` for an unknown key under
/// [`MissingKeyPolicy::Error`].
pub fn resolve_keys<S: AsRef<str>>(
    table: &ComponentMetadataTable,
    keys: &[S],
    policy: MissingKeyPolicy,
) -> Result<Resolution, TableError> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for key in keys {
        let key: &str = key.as_ref();
        if !seen.insert(key) {
            continue;
        }
        match table.get(key) {
            Ok(record) => found.push((key, record.clone())),
            Err(err) if policy == MissingKeyPolicy::Error => return Err(err),
            Err(_) => missing.push(key.to_string()),
        }
    }

    Ok(Resolution {
        found: ComponentMetadataTable::from_entries(found)?,
        missing,
    })
}

/// Look up many node keys, from arguments or stdin.
pub fn resolve(
    ctx: &Context,
    keys: Vec<String>,
    missing: Option<MissingKeyPolicy>,
    json: Option<bool>,
) -> Result<()> {
    let keys = if keys.is_empty() {
        output::debug("reading node keys from stdin", ctx.verbosity);
        read_keys(std::io::stdin().lock())?
    } else {
        keys
    };

    let table = ctx.table()?;
    let resolution = resolve_keys(&table, keys.as_slice(), ctx.missing_policy(missing))?;

    for key in &resolution.missing {
        output::warn(format!("unknown node key: {} (skipped)", key), ctx.verbosity);
    }

    if ctx.json(json) {
        println!("{}", resolution.found.to_json_pretty()?);
    } else {
        let blocks: Vec<String> = resolution
            .found
            .iter()
            .map(|(key, record)| output::format_record(key.as_str(), record))
            .collect();
        if !blocks.is_empty() {
            println!("{}", blocks.join("\n\n"));
        }
    }

    Ok(())
}

/// Read one key per line, trimming whitespace and skipping blank lines.
fn read_keys(reader: impl BufRead) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read node keys from stdin")?;
        let key = line.trim();
        if !key.is_empty() {
            keys.push(key.to_string());
        }
    }
    Ok(keys)
}
