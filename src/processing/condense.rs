//! Address condensation via interval dynamic programming.
//!
//! Folds a sorted list of host addresses into the smallest possible set of
//! CIDR subnets whose occupancy stays above the configured utilization
//! floor. O(n^3) time, O(n^2) space, all owned by a single call.

use crate::models::{span, CondenseConfig, Ipv4};
use std::net::Ipv4Addr;

/// One entry of the condensation table: the minimum number of subnets the
/// index range can be folded into, and the subnets achieving it.
#[derive(Debug, Clone, Default)]
struct Cell {
    count: usize,
    subnets: Vec<Ipv4>,
}

/// Square table of [`Cell`]s indexed by (range start, range end).
///
/// Only cells on or above the diagonal are ever written or read; the answer
/// for the whole list ends up in (0, n-1).
struct Table {
    n: usize,
    cells: Vec<Cell>,
}

impl Table {
    fn new(n: usize) -> Self {
        Table {
            n,
            cells: vec![Cell::default(); n * n],
        }
    }

    fn get(&self, i: usize, j: usize) -> &Cell {
        &self.cells[i * self.n + j]
    }

    fn set(&mut self, i: usize, j: usize, cell: Cell) {
        self.cells[i * self.n + j] = cell;
    }
}

/// Decide whether all addresses of a sub-range may be folded into the single
/// network spanning `start` and `end`.
///
/// `num_addresses` is the number of original input addresses in the range,
/// not the capacity of the candidate block.
pub fn can_condense(
    start: Ipv4Addr,
    end: Ipv4Addr,
    num_addresses: usize,
    min_utilization: f64,
) -> bool {
    let candidate = span(start, end);
    let utilization = num_addresses as f64 / candidate.capacity() as f64;
    utilization >= min_utilization
}

/// Condense a sorted, duplicate-free address list into the minimal set of
/// subnets meeting the utilization floor.
///
/// Sortedness is a precondition: the table reasons about contiguous index
/// ranges, so an unsorted list produces meaningless spans. Public entry
/// points validate it via [`crate::processing::check_sorted_unique`] before
/// calling here. An empty list condenses to an empty result.
pub fn condense(addrs: &[Ipv4Addr], config: &CondenseConfig) -> Vec<Ipv4> {
    let n = addrs.len();
    if n == 0 {
        return Vec::new();
    }
    log::debug!(
        "condense() over {} addresses, min utilization {}",
        n,
        config.min_utilization
    );

    let mut table = Table::new(n);

    // Fill diagonally: diff is the index distance between range start and
    // end, so every sub-range a cell needs is already filled.
    for diff in 0..n {
        for i in 0..n - diff {
            let j = i + diff;
            let cell = if diff == 0 {
                // A lone address is always its own /32.
                Cell {
                    count: 1,
                    subnets: vec![Ipv4::host(addrs[i])],
                }
            } else if can_condense(addrs[i], addrs[j], diff + 1, config.min_utilization) {
                // One block covering the whole range beats any split.
                Cell {
                    count: 1,
                    subnets: vec![span(addrs[i], addrs[j])],
                }
            } else if diff == 1 {
                // Two addresses that may not merge stay two /32s.
                Cell {
                    count: 2,
                    subnets: vec![Ipv4::host(addrs[i]), Ipv4::host(addrs[j])],
                }
            } else {
                best_split(&table, i, j)
            };
            table.set(i, j, cell);
        }
    }

    table.get(0, n - 1).subnets.clone()
}

/// Scan every split point of the range and keep the first split with the
/// lowest combined subnet count.
fn best_split(table: &Table, i: usize, j: usize) -> Cell {
    let mut min_count = usize::MAX;
    let mut subnets = Vec::new();

    for l in i..j {
        let left = table.get(i, l);
        let right = table.get(l + 1, j);
        let count = left.count + right.count;
        if count < min_count {
            min_count = count;
            subnets = left
                .subnets
                .iter()
                .chain(right.subnets.iter())
                .copied()
                .collect();
        }
    }

    Cell {
        count: min_count,
        subnets,
    }
}
