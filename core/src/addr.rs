//! # Address Value
//!
//! The family-polymorphic address type. One closed enum carries either
//! payload inline; no heap allocation, no trait objects. Everything an
//! address can do is dispatched from here onto the variant modules.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::AddrError;
use crate::family::Family;
use crate::v4::Ipv4Repr;
use crate::v6::Ipv6Repr;

/// An IPv4 or IPv6 address value.
///
/// Immutable once constructed; every transformation returns a new value.
/// The variant tag is the single source of truth for family and payload
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpAddress {
    V4(Ipv4Repr),
    V6(Ipv6Repr),
}

/// Forwards a predicate to whichever payload is inside.
macro_rules! classifiers {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> bool {
                match self {
                    IpAddress::V4(addr) => addr.$name(),
                    IpAddress::V6(addr) => addr.$name(),
                }
            }
        )+
    };
}

impl IpAddress {
    /// The wildcard of the given family; with [`Family::V4`] this is the
    /// same address a default-constructed value holds.
    pub fn new(family: Family) -> Self {
        Self::wildcard(family)
    }

    /// The all-zero address of the given family (`0.0.0.0` / `::`).
    pub fn wildcard(family: Family) -> Self {
        match family {
            Family::V4 => IpAddress::V4(Ipv4Repr::WILDCARD),
            Family::V6 => IpAddress::V6(Ipv6Repr::WILDCARD),
        }
    }

    /// The IPv4 limited broadcast address, `255.255.255.255`.
    pub fn broadcast() -> Self {
        IpAddress::V4(Ipv4Repr::BROADCAST)
    }

    /// Builds an address from a raw payload; the slice length selects the
    /// family. Any length other than 4 or 16 is invalid.
    pub fn from_raw(bytes: &[u8]) -> Result<Self, AddrError> {
        Self::from_raw_scoped(bytes, 0)
    }

    /// Like [`from_raw`](Self::from_raw) with an explicit zone id. The zone
    /// only applies to IPv6 payloads and is ignored for IPv4 ones.
    pub fn from_raw_scoped(bytes: &[u8], scope: u32) -> Result<Self, AddrError> {
        match bytes.len() {
            4 => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(bytes);
                Ok(IpAddress::V4(Ipv4Repr::new(octets)))
            }
            16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(bytes);
                Ok(IpAddress::V6(Ipv6Repr::new(octets, scope)))
            }
            len => Err(AddrError::InvalidLength(len)),
        }
    }

    /// Parses an address literal, trying the IPv4 grammar first and falling
    /// through to IPv6. Empty input (and the trimmed wildcard literals)
    /// yields the wildcard of the matching family.
    pub fn parse(text: &str) -> Result<Self, AddrError> {
        Self::try_parse(text).ok_or_else(|| AddrError::InvalidFormat(text.to_string()))
    }

    /// The non-failing form of [`parse`](Self::parse).
    pub fn try_parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "0.0.0.0" {
            return Some(Self::wildcard(Family::V4));
        }
        if let Some(addr) = Ipv4Repr::parse(text) {
            return Some(IpAddress::V4(addr));
        }
        if trimmed == "::" {
            return Some(Self::wildcard(Family::V6));
        }
        Ipv6Repr::parse(text).map(IpAddress::V6)
    }

    /// Parses strictly as the requested family; the other family's grammar
    /// is never consulted and a mismatch is an error.
    pub fn parse_family(text: &str, family: Family) -> Result<Self, AddrError> {
        let parsed = match family {
            Family::V4 => Ipv4Repr::parse(text).map(IpAddress::V4),
            Family::V6 => Ipv6Repr::parse(text).map(IpAddress::V6),
        };
        parsed.ok_or_else(|| AddrError::InvalidFormat(text.to_string()))
    }

    pub fn family(&self) -> Family {
        match self {
            IpAddress::V4(_) => Family::V4,
            IpAddress::V6(_) => Family::V6,
        }
    }

    /// Payload length in bytes, derived from the variant tag.
    pub fn len(&self) -> usize {
        self.family().len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            IpAddress::V4(addr) => addr.as_bytes(),
            IpAddress::V6(addr) => addr.as_bytes(),
        }
    }

    /// Zone id; always 0 for IPv4 and for IPv6 without a zone.
    pub fn scope(&self) -> u32 {
        match self {
            IpAddress::V4(_) => 0,
            IpAddress::V6(addr) => addr.scope(),
        }
    }

    classifiers! {
        /// All-zero address of the family.
        is_wildcard,
        /// IPv4 limited broadcast; always false for IPv6.
        is_broadcast,
        is_loopback,
        is_multicast,
        is_link_local,
        is_site_local,
        is_ipv4_compatible,
        is_ipv4_mapped,
        is_well_known_mc,
        is_node_local_mc,
        is_link_local_mc,
        is_site_local_mc,
        is_org_local_mc,
        is_global_mc,
    }

    /// Neither wildcard, broadcast nor multicast.
    pub fn is_unicast(&self) -> bool {
        !self.is_wildcard() && !self.is_broadcast() && !self.is_multicast()
    }

    /// Netmask with `prefix` leading one bits in the given family.
    pub fn from_prefix(prefix: u32, family: Family) -> Result<Self, AddrError> {
        match family {
            Family::V4 => Ipv4Repr::from_prefix(prefix).map(IpAddress::V4),
            Family::V6 => Ipv6Repr::from_prefix(prefix).map(IpAddress::V6),
        }
    }

    /// Number of leading one bits in the payload. Meaningful only when the
    /// address encodes a contiguous netmask; no validation is performed.
    pub fn prefix_len(&self) -> u32 {
        match self {
            IpAddress::V4(addr) => addr.prefix_len(),
            IpAddress::V6(addr) => addr.prefix_len(),
        }
    }

    /// Byte-wise AND. Both operands must share a family; IPv6 results keep
    /// the left operand's zone.
    pub fn and(&self, other: &Self) -> Result<Self, AddrError> {
        match (self, other) {
            (IpAddress::V4(a), IpAddress::V4(b)) => Ok(IpAddress::V4(a.and(b))),
            (IpAddress::V6(a), IpAddress::V6(b)) => Ok(IpAddress::V6(a.and(b))),
            _ => Err(self.mismatch(other)),
        }
    }

    /// Byte-wise OR; same family rules as [`and`](Self::and).
    pub fn or(&self, other: &Self) -> Result<Self, AddrError> {
        match (self, other) {
            (IpAddress::V4(a), IpAddress::V4(b)) => Ok(IpAddress::V4(a.or(b))),
            (IpAddress::V6(a), IpAddress::V6(b)) => Ok(IpAddress::V6(a.or(b))),
            _ => Err(self.mismatch(other)),
        }
    }

    /// Byte-wise XOR; same family rules as [`and`](Self::and).
    pub fn xor(&self, other: &Self) -> Result<Self, AddrError> {
        match (self, other) {
            (IpAddress::V4(a), IpAddress::V4(b)) => Ok(IpAddress::V4(a.xor(b))),
            (IpAddress::V6(a), IpAddress::V6(b)) => Ok(IpAddress::V6(a.xor(b))),
            _ => Err(self.mismatch(other)),
        }
    }

    /// `self AND mask`: the network address under the given netmask.
    pub fn mask(&self, mask: &Self) -> Result<Self, AddrError> {
        self.and(mask)
    }

    /// `(self AND mask) OR (set AND NOT mask)`: the network part of `self`
    /// with the host bits taken from `set`.
    pub fn mask_with(&self, mask: &Self, set: &Self) -> Result<Self, AddrError> {
        let network = self.and(mask)?;
        let host = set.and(&!*mask)?;
        network.or(&host)
    }

    fn mismatch(&self, other: &Self) -> AddrError {
        AddrError::FamilyMismatch {
            lhs: self.family(),
            rhs: other.family(),
        }
    }
}

impl Default for IpAddress {
    /// The IPv4 wildcard, `0.0.0.0`.
    fn default() -> Self {
        Self::wildcard(Family::V4)
    }
}

impl std::ops::Not for IpAddress {
    type Output = IpAddress;

    /// Byte-wise complement; the zone survives on IPv6.
    fn not(self) -> IpAddress {
        match self {
            IpAddress::V4(addr) => IpAddress::V4(addr.complement()),
            IpAddress::V6(addr) => IpAddress::V6(addr.complement()),
        }
    }
}

impl Ord for IpAddress {
    /// Total order over all addresses: the shorter payload sorts first
    /// (IPv4 before IPv6); equal-length payloads compare by zone first,
    /// then by unsigned lexicographic byte order.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (IpAddress::V4(a), IpAddress::V4(b)) => a.cmp(b),
            (IpAddress::V6(a), IpAddress::V6(b)) => a.cmp(b),
            (IpAddress::V4(_), IpAddress::V6(_)) => Ordering::Less,
            (IpAddress::V6(_), IpAddress::V4(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for IpAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpAddress::V4(addr) => fmt::Display::fmt(addr, f),
            IpAddress::V6(addr) => fmt::Display::fmt(addr, f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dotted_quad() {
        let addr = IpAddress::parse("192.168.1.1").unwrap();
        assert_eq!(addr.family(), Family::V4);
        assert_eq!(addr.as_bytes(), &[192, 168, 1, 1]);
        assert_eq!(addr.to_string(), "192.168.1.1");
    }

    #[test]
    fn parse_loopback_v6() {
        let addr = IpAddress::parse("::1").unwrap();
        assert_eq!(addr.family(), Family::V6);
        assert!(addr.is_loopback());
    }

    #[test]
    fn empty_and_wildcard_literals() {
        for text in ["", "   ", "0.0.0.0", " 0.0.0.0 "] {
            let addr = IpAddress::parse(text).unwrap();
            assert_eq!(addr, IpAddress::default());
            assert_eq!(addr.to_string(), "0.0.0.0");
        }
        let v6 = IpAddress::parse(" :: ").unwrap();
        assert_eq!(v6, IpAddress::wildcard(Family::V6));
        assert!(v6.is_wildcard());
    }

    #[test]
    fn try_parse_never_fails() {
        assert_eq!(IpAddress::try_parse("not-an-ip"), None);
        assert_eq!(IpAddress::try_parse("1.2.3.4.5"), None);
        assert!(IpAddress::try_parse("10.0.0.1").is_some());
    }

    #[test]
    fn parse_family_is_strict() {
        assert_eq!(
            IpAddress::parse_family("::1", Family::V4),
            Err(AddrError::InvalidFormat("::1".to_string()))
        );
        assert_eq!(
            IpAddress::parse_family("10.0.0.1", Family::V6),
            Err(AddrError::InvalidFormat("10.0.0.1".to_string()))
        );
        assert_eq!(
            IpAddress::parse_family("10.0.0.1", Family::V4).unwrap(),
            IpAddress::parse("10.0.0.1").unwrap()
        );
        // The general parser's empty-input special case does not apply here.
        assert!(IpAddress::parse_family("", Family::V4).is_err());
    }

    #[test]
    fn raw_construction() {
        let v4 = IpAddress::from_raw(&[10, 0, 0, 1]).unwrap();
        assert_eq!(v4.to_string(), "10.0.0.1");

        let mut bytes = [0u8; 16];
        bytes[15] = 1;
        let v6 = IpAddress::from_raw_scoped(&bytes, 9).unwrap();
        assert_eq!(v6.scope(), 9);

        // Scope has no home on an IPv4 payload.
        let v4_scoped = IpAddress::from_raw_scoped(&[10, 0, 0, 1], 9).unwrap();
        assert_eq!(v4_scoped.scope(), 0);

        assert_eq!(
            IpAddress::from_raw(&[1, 2, 3]),
            Err(AddrError::InvalidLength(3))
        );
        assert_eq!(
            IpAddress::from_raw(&[0; 17]),
            Err(AddrError::InvalidLength(17))
        );
    }

    #[test]
    fn netmask_construction() {
        let mask = IpAddress::from_prefix(24, Family::V4).unwrap();
        assert_eq!(mask.to_string(), "255.255.255.0");
        assert_eq!(mask.prefix_len(), 24);

        let mask6 = IpAddress::from_prefix(48, Family::V6).unwrap();
        assert_eq!(mask6.to_string(), "ffff:ffff:ffff::");

        assert_eq!(
            IpAddress::from_prefix(33, Family::V4),
            Err(AddrError::InvalidPrefix {
                prefix: 33,
                family: Family::V4
            })
        );
    }

    #[test]
    fn broadcast_is_all_ones_v4() {
        let addr = IpAddress::broadcast();
        assert_eq!(addr.to_string(), "255.255.255.255");
        assert!(addr.is_broadcast());
        assert!(!addr.is_unicast());
    }

    #[test]
    fn unicast_is_derived() {
        assert!(IpAddress::parse("192.168.1.1").unwrap().is_unicast());
        assert!(!IpAddress::default().is_unicast());
        assert!(!IpAddress::parse("ff02::1").unwrap().is_unicast());
        assert!(IpAddress::parse("2001:db8::1").unwrap().is_unicast());
    }

    #[test]
    fn cross_family_operators_fail() {
        let v4 = IpAddress::parse("10.0.0.1").unwrap();
        let v6 = IpAddress::parse("::1").unwrap();
        let expected = AddrError::FamilyMismatch {
            lhs: Family::V4,
            rhs: Family::V6,
        };
        assert_eq!(v4.and(&v6), Err(expected.clone()));
        assert_eq!(v4.or(&v6), Err(expected.clone()));
        assert_eq!(v4.xor(&v6), Err(expected.clone()));
        assert_eq!(v4.mask(&v6), Err(expected));
    }

    #[test]
    fn masking_extracts_network() {
        let addr = IpAddress::parse("192.168.1.77").unwrap();
        let mask = IpAddress::from_prefix(24, Family::V4).unwrap();
        assert_eq!(addr.mask(&mask).unwrap().to_string(), "192.168.1.0");
    }

    #[test]
    fn mask_with_overlays_host_bits() {
        let addr = IpAddress::parse("192.168.1.77").unwrap();
        let mask = IpAddress::from_prefix(24, Family::V4).unwrap();
        let host = IpAddress::parse("0.0.0.200").unwrap();
        let combined = addr.mask_with(&mask, &host).unwrap();
        assert_eq!(combined.to_string(), "192.168.1.200");
    }

    #[test]
    fn mask_partition_identity() {
        let addr = IpAddress::parse("203.0.113.29").unwrap();
        let mask = IpAddress::from_prefix(13, Family::V4).unwrap();
        let rebuilt = addr
            .and(&mask)
            .unwrap()
            .or(&addr.and(&!mask).unwrap())
            .unwrap();
        assert_eq!(rebuilt, addr);
    }

    #[test]
    fn ordering_is_total_and_length_first() {
        let a = IpAddress::parse("9.255.255.255").unwrap();
        let b = IpAddress::parse("10.0.0.0").unwrap();
        let c = IpAddress::parse("::").unwrap();
        let d = IpAddress::parse("fe80::1%2").unwrap();

        // Every IPv4 sorts below every IPv6, even the IPv6 wildcard.
        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
        assert!(a < d);

        let mut sorted = vec![d, b, c, a];
        sorted.sort();
        assert_eq!(sorted, vec![a, b, c, d]);
    }

    #[test]
    fn equality_requires_same_scope() {
        let plain = IpAddress::parse("fe80::1").unwrap();
        let zoned = IpAddress::parse("fe80::1%4").unwrap();
        assert_ne!(plain, zoned);
        assert!(plain < zoned);
    }

    #[test]
    fn display_roundtrip() {
        for text in [
            "0.0.0.0",
            "10.0.0.1",
            "255.255.255.255",
            "::",
            "::1",
            "2001:db8::8:800:200c:417a",
            "::ffff:192.168.1.1",
            "fe80::1%12",
        ] {
            let addr = IpAddress::parse(text).unwrap();
            let reparsed = IpAddress::parse(&addr.to_string()).unwrap();
            assert_eq!(addr, reparsed, "round trip of {text}");
        }
    }
}
