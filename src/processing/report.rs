//! Utilization reporting for condensed results.

use crate::models::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// One row of the condensation report: a resulting subnet and how much of
/// it the original input actually occupies.
#[derive(Debug, Serialize)]
pub struct CondenseRow {
    /// Subnet in CIDR notation.
    pub subnet_cidr: String,
    /// Total addresses the subnet can hold.
    pub capacity: u64,
    /// Input addresses folded into this subnet.
    pub used: usize,
    /// Occupied fraction, used / capacity.
    pub utilization: f64,
}

/// Build report rows for a condensation result.
///
/// Every input address lands in exactly one resulting subnet, so counting
/// containment per subnet attributes the whole input.
pub fn condense_report(addrs: &[Ipv4Addr], subnets: &[Ipv4]) -> Vec<CondenseRow> {
    subnets
        .iter()
        .map(|net| {
            let used = addrs.iter().filter(|addr| net.contains(**addr)).count();
            let capacity = net.capacity();
            CondenseRow {
                subnet_cidr: net.to_string(),
                capacity,
                used,
                utilization: used as f64 / capacity as f64,
            }
        })
        .collect()
}
