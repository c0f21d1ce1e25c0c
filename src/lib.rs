//! Condense a sorted list of IPv4 host addresses into a minimal set of CIDR
//! subnets, subject to a minimum utilization ratio per resulting subnet.

pub mod cmd;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use models::{CondenseConfig, Ipv4};
use processing::{check_sorted_unique, condense, parse_address_list};
use std::error::Error;
use std::net::Ipv4Addr;

/// Parse a textual address list and fail fast on unsorted or duplicate input.
pub fn parse_and_validate(tokens: &[String]) -> Result<Vec<Ipv4Addr>, Box<dyn Error>> {
    let addrs = parse_address_list(tokens)?;
    check_sorted_unique(&addrs)?;
    Ok(addrs)
}

/// Condense already-parsed addresses, re-checking the sort precondition.
pub fn condense_addresses(
    addrs: &[Ipv4Addr],
    config: &CondenseConfig,
) -> Result<Vec<Ipv4>, Box<dyn Error>> {
    check_sorted_unique(addrs)?;
    Ok(condense(addrs, config))
}

/// Parse, validate, and condense a textual address list.
///
/// Returns the resulting networks as `"a.b.c.d/p"` strings in the order the
/// condensation produced them.
pub fn condense_address_list(
    tokens: &[String],
    config: &CondenseConfig,
) -> Result<Vec<String>, Box<dyn Error>> {
    let addrs = parse_and_validate(tokens)?;
    let subnets = condense(&addrs, config);
    Ok(subnets.iter().map(|net| net.to_string()).collect())
}
