//! Output formatting for condensation results.
//!
//! This module handles rendering the condensation report:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output formatting
//! - [`terminal`] - plain terminal output with a colored summary

mod csv;
mod json;
mod terminal;

pub use csv::print_csv;
pub use json::print_json;
pub use terminal::{format_field, print_subnets, print_summary};
