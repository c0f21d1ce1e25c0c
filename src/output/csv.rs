//! CSV output formatting for condensation results.

use super::terminal::format_field;
use crate::processing::CondenseRow;
use std::error::Error;

/// Print the condensation report as CSV to stdout.
pub fn print_csv(rows: &[CondenseRow]) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_csv() with {} rows", rows.len());

    let now = chrono::Local::now();
    println!("# condensed subnets generated {}", now.format("%Y-%m-%d %H:%M:%S"));
    println!(r#"     "subnet_cidr",   "capacity",  "used", "utilization""#);

    for row in rows {
        print_csv_row(row);
    }

    Ok(())
}

/// Print a single CSV row.
fn print_csv_row(row: &CondenseRow) {
    println!(
        "{subnet_cidr},{capacity},{used},{utilization}",
        subnet_cidr = format_field(&row.subnet_cidr, 18),
        capacity = format_field(row.capacity, 12),
        used = format_field(row.used, 7),
        utilization = format_field(format!("{:.1}%", row.utilization * 100.0), 13),
    );
}
