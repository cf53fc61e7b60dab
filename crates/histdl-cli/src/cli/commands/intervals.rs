//! `histdl intervals` – list interval codes.

use anyhow::Result;
use histdl_core::catalog::Interval;
use serde_json::json;

pub fn run_intervals(json: bool) -> Result<()> {
    if json {
        let rows: Vec<_> = Interval::ALL
            .iter()
            .map(|i| json!({ "code": i.code(), "label": i.label() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    println!("{:<6} {}", "CODE", "LABEL");
    for i in Interval::ALL {
        println!("{:<6} {}", i.code(), i.label());
    }
    Ok(())
}
