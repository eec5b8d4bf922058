//! # IPv4 Payload
//!
//! The 4-byte variant behind [`IpAddress`](crate::addr::IpAddress): dotted-quad
//! grammar, address-class predicates, and netmask arithmetic.

use std::fmt;

use crate::error::AddrError;
use crate::family::Family;

/// Raw IPv4 address value: four bytes in network order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ipv4Repr {
    octets: [u8; 4],
}

impl Ipv4Repr {
    /// The all-zero address, `0.0.0.0`.
    pub const WILDCARD: Ipv4Repr = Ipv4Repr { octets: [0; 4] };
    /// The limited broadcast address, `255.255.255.255`.
    pub const BROADCAST: Ipv4Repr = Ipv4Repr { octets: [0xFF; 4] };

    pub const fn new(octets: [u8; 4]) -> Self {
        Self { octets }
    }

    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.octets
    }

    /// Host-order view of the payload, used by the class predicates.
    fn value(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// Parses a strict dotted quad: exactly four decimal fields in [0, 255],
    /// no signs, no whitespace. Returns `None` for anything else so the
    /// caller can fall through to the IPv6 grammar.
    pub fn parse(s: &str) -> Option<Ipv4Repr> {
        let mut fields = s.split('.');
        let mut octets = [0u8; 4];
        for slot in &mut octets {
            *slot = parse_octet(fields.next()?)?;
        }
        if fields.next().is_some() {
            return None;
        }
        Some(Self::new(octets))
    }

    /// Builds the netmask whose leading `prefix` bits are ones.
    pub fn from_prefix(prefix: u32) -> Result<Self, AddrError> {
        if prefix > Family::V4.max_prefix() {
            return Err(AddrError::InvalidPrefix {
                prefix,
                family: Family::V4,
            });
        }
        let value = match prefix {
            0 => 0,
            n => u32::MAX << (32 - n),
        };
        Ok(Self::new(value.to_be_bytes()))
    }

    /// Number of leading one bits. Meaningful only when the payload is a
    /// left-aligned contiguous netmask; no validation is performed.
    pub fn prefix_len(&self) -> u32 {
        self.value().leading_ones()
    }

    pub fn is_wildcard(&self) -> bool {
        self.value() == 0
    }

    pub fn is_broadcast(&self) -> bool {
        self.value() == u32::MAX
    }

    /// 127.0.0.0/8
    pub fn is_loopback(&self) -> bool {
        self.value() & 0xFF00_0000 == 0x7F00_0000
    }

    /// 224.0.0.0/4
    pub fn is_multicast(&self) -> bool {
        self.value() & 0xF000_0000 == 0xE000_0000
    }

    /// 169.254.0.0/16
    pub fn is_link_local(&self) -> bool {
        self.value() & 0xFFFF_0000 == 0xA9FE_0000
    }

    /// 10.0.0.0/8, 192.168.0.0/16 or 172.16.0.0 through 172.31.255.255
    pub fn is_site_local(&self) -> bool {
        let value = self.value();
        value & 0xFF00_0000 == 0x0A00_0000
            || value & 0xFFFF_0000 == 0xC0A8_0000
            || (0xAC10_0000..=0xAC1F_FFFF).contains(&value)
    }

    /// Every IPv4 address is representable in the compatible IPv6 form.
    pub fn is_ipv4_compatible(&self) -> bool {
        true
    }

    /// Every IPv4 address is representable in the mapped IPv6 form.
    pub fn is_ipv4_mapped(&self) -> bool {
        true
    }

    /// 224.0.0.0 through 224.0.0.255
    pub fn is_well_known_mc(&self) -> bool {
        self.value() & 0xFFFF_FF00 == 0xE000_0000
    }

    /// Node-local scope does not exist for IPv4.
    pub fn is_node_local_mc(&self) -> bool {
        false
    }

    /// The whole 224.0.0.0/8 block, matching the permissive mask of the
    /// reference behavior.
    pub fn is_link_local_mc(&self) -> bool {
        self.value() & 0xFF00_0000 == 0xE000_0000
    }

    /// 239.255.0.0/16
    pub fn is_site_local_mc(&self) -> bool {
        self.value() & 0xFFFF_0000 == 0xEFFF_0000
    }

    /// 239.192.0.0/16
    pub fn is_org_local_mc(&self) -> bool {
        self.value() & 0xFFFF_0000 == 0xEFC0_0000
    }

    /// 224.0.1.0 through 238.0.0.0
    pub fn is_global_mc(&self) -> bool {
        (0xE000_0100..=0xEE00_0000).contains(&self.value())
    }

    pub fn and(&self, other: &Self) -> Self {
        Self::new((self.value() & other.value()).to_be_bytes())
    }

    pub fn or(&self, other: &Self) -> Self {
        Self::new((self.value() | other.value()).to_be_bytes())
    }

    pub fn xor(&self, other: &Self) -> Self {
        Self::new((self.value() ^ other.value()).to_be_bytes())
    }

    pub fn complement(&self) -> Self {
        Self::new((!self.value()).to_be_bytes())
    }
}

impl fmt::Display for Ipv4Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

/// Parses one decimal octet field: 1-3 digits, value <= 255. Leading zeros
/// are read as decimal.
fn parse_octet(field: &str) -> Option<u8> {
    if field.is_empty() || field.len() > 3 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = field
        .bytes()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
    u8::try_from(value).ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
