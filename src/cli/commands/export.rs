//! export command - Print the table as JSON

use crate::cli::Context;
use anyhow::Result;

/// Print the table as pretty JSON.
///
/// The output can be fed back through `--table`.
pub fn export(ctx: &Context) -> Result<()> {
    let table = ctx.table()?;
    println!("{}", table.to_json_pretty()?);
    Ok(())
}
