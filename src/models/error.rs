//! Error types for parsing, validation, and configuration.

use std::net::Ipv4Addr;

/// Errors surfaced before the condensation itself runs.
///
/// The condenser is total over valid input, so every failure mode lives at
/// the boundary: bad address text, a broken sort precondition, a bad
/// utilization ratio, or an unreadable input source.
#[derive(Debug, thiserror::Error)]
pub enum CondenseError {
    #[error("invalid IPv4 address: {token}")]
    InvalidAddress { token: String },

    #[error("address list not sorted: {prev} appears before {next}")]
    AddressesOutOfOrder { prev: Ipv4Addr, next: Ipv4Addr },

    #[error("duplicate address in input: {addr}")]
    DuplicateAddress { addr: Ipv4Addr },

    #[error("invalid minimum utilization ratio: {value} (expected a fraction in (0, 1])")]
    InvalidUtilization { value: String },

    #[error("error reading address list: {reason}")]
    ReadFailed { reason: String },
}
