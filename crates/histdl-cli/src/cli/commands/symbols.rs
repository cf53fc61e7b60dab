//! `histdl symbols` – list the symbols offered for a category.

use anyhow::Result;
use histdl_core::catalog::{AssetCategory, OTHER_SYMBOL};

pub fn run_symbols(asset: AssetCategory, json: bool) -> Result<()> {
    let symbols = asset.symbols();
    if json {
        println!("{}", serde_json::to_string_pretty(symbols)?);
        return Ok(());
    }
    for s in symbols {
        println!("{s}");
    }
    println!("({OTHER_SYMBOL}: pass --symbol {OTHER_SYMBOL} --symbol-other <SYMBOL>)");
    Ok(())
}
