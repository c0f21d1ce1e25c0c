//! JSON output formatting for condensation results.

use crate::processing::CondenseRow;
use std::error::Error;

/// Print the condensation report as pretty JSON to stdout.
pub fn print_json(rows: &[CondenseRow]) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| format!("Error serializing report JSON: {e}"))?;
    println!("{json}");
    Ok(())
}
