//! Availability zone selection
//!
//! The `zones` parameter declares a comma-separated candidate set; one member
//! is picked per share so that repeated provisioning of the same claim lands
//! in the same zone. The pick hashes the claim name with FNV-1a (32 bit) over
//! the sorted set, matching the stable behavior of the upstream Kubernetes
//! `ChooseZoneForVolume` helper.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Parse a comma-separated zone list into a set.
///
/// Entries are trimmed and empty entries dropped; an input yielding no zones
/// is an error.
pub fn zones_to_set(zones: &str) -> Result<BTreeSet<String>> {
    let set: BTreeSet<String> = zones
        .split(',')
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .map(str::to_owned)
        .collect();

    if set.is_empty() {
        return Err(Error::EmptyZoneSet {
            zones: zones.to_owned(),
        });
    }

    Ok(set)
}

/// Deterministically pick one zone for a share.
///
/// Same `(zones, share_name)` pair, same zone. Fails only on an empty set.
pub fn choose_zone_for_share(zones: &BTreeSet<String>, share_name: &str) -> Result<String> {
    if zones.is_empty() {
        return Err(Error::EmptyZoneSet {
            zones: String::new(),
        });
    }

    let index = fnv32a(share_name) as usize % zones.len();
    // BTreeSet iterates in sorted order, so the index is stable.
    Ok(zones
        .iter()
        .nth(index)
        .cloned()
        .unwrap_or_default())
}

/// FNV-1a, 32 bit
fn fnv32a(data: &str) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    let mut hash = OFFSET_BASIS;
    for byte in data.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
