//! check command - Verify the table

use crate::cli::Context;
use crate::core::verify::verify_table;
use crate::ui::output;
use anyhow::{bail, Result};

/// Verify the table, printing every issue found.
pub fn check(ctx: &Context) -> Result<()> {
    let table = ctx.table()?;
    let result = verify_table(&table);

    if !result.ok {
        for issue in &result.errors {
            output::error(issue);
        }
        bail!(
            "table failed verification with {} issue(s)",
            result.errors.len()
        );
    }

    output::print(
        format!(
            "ok: {} entries, fingerprint {}",
            table.len(),
            table.fingerprint()
        ),
        ctx.verbosity,
    );

    Ok(())
}
