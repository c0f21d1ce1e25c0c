//! Address condensation logic.
//!
//! This module contains the business logic of the crate:
//! - [`condense`] - interval dynamic program folding addresses into subnets
//! - [`validate`] - boundary checks for the sorted-list precondition
//! - [`report`] - per-subnet utilization rows for the output layer

mod condense;
mod report;
mod validate;

// Re-export public functions
pub use condense::{can_condense, condense};
pub use report::{condense_report, CondenseRow};
pub use validate::{check_sorted_unique, parse_address_list};
