//! Shared generators for the integration test suite.

use ipkit_core::{Family, IpAddress};
use rand::Rng;

pub fn random_v4(rng: &mut impl Rng) -> IpAddress {
    let bytes: [u8; 4] = rng.random();
    IpAddress::from_raw(&bytes).expect("4 bytes is a valid payload")
}

/// Random IPv6 address; about half carry a small nonzero zone id.
pub fn random_v6(rng: &mut impl Rng) -> IpAddress {
    let bytes: [u8; 16] = rng.random();
    let scope = if rng.random_bool(0.5) {
        rng.random_range(1..16)
    } else {
        0
    };
    IpAddress::from_raw_scoped(&bytes, scope).expect("16 bytes is a valid payload")
}

pub fn random_addr(rng: &mut impl Rng) -> IpAddress {
    if rng.random_bool(0.5) {
        random_v4(rng)
    } else {
        random_v6(rng)
    }
}

/// A random contiguous netmask of the same family as `addr`.
pub fn random_mask_for(rng: &mut impl Rng, addr: &IpAddress) -> IpAddress {
    let family = addr.family();
    let prefix = rng.random_range(0..=family.max_prefix());
    IpAddress::from_prefix(prefix, family).expect("prefix drawn within range")
}

pub fn wildcards() -> [IpAddress; 2] {
    [
        IpAddress::wildcard(Family::V4),
        IpAddress::wildcard(Family::V6),
    ]
}
