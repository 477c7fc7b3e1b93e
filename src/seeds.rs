//! Fixed-seed conversion
//!
//! The compiled seed tables store each IPv4 address as a raw u32 in
//! compile-time byte order; conversion swaps all four bytes and reads the
//! result as a big-endian address. The swap must be exact: a wrong swap
//! resolves every fixed seed to the wrong host with no error signal.

use crate::constants::ONE_WEEK;
use crate::types::Natural;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::{SystemTime, UNIX_EPOCH};

/// A bootstrap peer address with a synthetic last-seen time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub ip: Ipv4Addr,
    pub port: u16,
    pub last_seen: Natural,
}

/// Convert a compiled seed table into address records.
///
/// A node only ever connects to one or two fixed seeds, because the first
/// connection yields a pile of addresses with newer timestamps. Each seed
/// is given a random last-seen time between one and two weeks ago, so the
/// whole table does not present a single shared timestamp to
/// peer-selection heuristics.
pub fn convert_seeds(table: &[u32], port: u16) -> Vec<SeedAddress> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    convert_seeds_at(table, port, now, &mut rand::thread_rng())
}

/// Conversion with an explicit clock and randomness source.
pub fn convert_seeds_at(
    table: &[u32],
    port: u16,
    now: Natural,
    rng: &mut impl Rng,
) -> Vec<SeedAddress> {
    table
        .iter()
        .map(|&raw| SeedAddress {
            ip: Ipv4Addr::from(raw.swap_bytes()),
            port,
            last_seen: now.saturating_sub(rng.gen_range(0..ONE_WEEK) + ONE_WEEK),
        })
        .collect()
}
