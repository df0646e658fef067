//! keys command - List node keys in table order

use crate::cli::Context;
use anyhow::Result;

/// List node keys in table order.
pub fn keys(ctx: &Context, json: Option<bool>) -> Result<()> {
    let table = ctx.table()?;

    if ctx.json(json) {
        let keys: Vec<&str> = table.keys().collect();
        println!("{}", serde_json::to_string_pretty(&keys)?);
    } else {
        for key in table.keys() {
            println!("{}", key);
        }
    }

    Ok(())
}
