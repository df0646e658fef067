//! get command - Show the metadata for one node

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

/// Show the metadata for one node.
///
/// An unknown key is an error.
pub fn get(ctx: &Context, key: &str, json: Option<bool>) -> Result<()> {
    let table = ctx.table()?;
    let record = table.get(key)?;

    if ctx.json(json) {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", output::format_record(key, record));
    }

    Ok(())
}
