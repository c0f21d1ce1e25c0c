//! Input validation for the address list.
//!
//! The condenser assumes a sorted, duplicate-free list; these checks run at
//! the public entry points so a broken precondition fails fast instead of
//! silently producing a wrong cover.

use crate::models::CondenseError;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Parse textual dotted-decimal addresses, reporting the first bad token.
pub fn parse_address_list(tokens: &[String]) -> Result<Vec<Ipv4Addr>, CondenseError> {
    tokens
        .iter()
        .map(|token| {
            let token = token.trim();
            token
                .parse::<Ipv4Addr>()
                .map_err(|_| CondenseError::InvalidAddress {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Verify the list is sorted ascending with no duplicates, naming the first
/// offending pair.
pub fn check_sorted_unique(addrs: &[Ipv4Addr]) -> Result<(), CondenseError> {
    for (prev, next) in addrs.iter().tuple_windows() {
        if prev == next {
            return Err(CondenseError::DuplicateAddress { addr: *prev });
        }
        if prev > next {
            return Err(CondenseError::AddressesOutOfOrder {
                prev: *prev,
                next: *next,
            });
        }
    }
    Ok(())
}
