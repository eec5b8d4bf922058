//! # IPv6 Payload
//!
//! The 16-byte variant behind [`IpAddress`](crate::addr::IpAddress): the full
//! colon-hex grammar (compression, embedded dotted quads, `%zone` suffix),
//! canonical compressed rendering, scope-aware predicates, and netmask
//! arithmetic.

use std::cmp::Ordering;
use std::fmt;

use crate::error::AddrError;
use crate::family::Family;
use crate::v4::Ipv4Repr;

/// Raw IPv6 address value: sixteen bytes in network order plus the zone
/// (scope) identifier disambiguating link-local addresses across interfaces.
/// A scope of 0 means "no zone".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ipv6Repr {
    octets: [u8; 16],
    scope: u32,
}

impl Ipv6Repr {
    /// The all-zero address, `::`.
    pub const WILDCARD: Ipv6Repr = Ipv6Repr {
        octets: [0; 16],
        scope: 0,
    };

    pub const fn new(octets: [u8; 16], scope: u32) -> Self {
        Self { octets, scope }
    }

    pub const fn octets(&self) -> [u8; 16] {
        self.octets
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.octets
    }

    pub const fn scope(&self) -> u32 {
        self.scope
    }

    /// Host-order view of the payload, used by arithmetic and predicates.
    fn value(&self) -> u128 {
        u128::from_be_bytes(self.octets)
    }

    /// The eight 16-bit groups, most significant first.
    fn words(&self) -> [u16; 8] {
        let mut words = [0u16; 8];
        for (word, chunk) in words.iter_mut().zip(self.octets.chunks_exact(2)) {
            *word = u16::from_be_bytes([chunk[0], chunk[1]]);
        }
        words
    }

    fn from_words(words: [u16; 8], scope: u32) -> Self {
        let mut octets = [0u8; 16];
        for (chunk, word) in octets.chunks_exact_mut(2).zip(words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self { octets, scope }
    }

    /// Parses the IPv6 grammar: colon-separated hextets of 1-4 hex digits,
    /// at most one `::` compression, an optional dotted quad occupying the
    /// last 32 bits, and an optional numeric `%zone` suffix.
    pub fn parse(s: &str) -> Option<Ipv6Repr> {
        let (body, scope) = split_zone(s)?;
        if body.is_empty() {
            return None;
        }

        let (head, tail) = match body.split_once("::") {
            Some((head, tail)) => {
                if tail.contains("::") {
                    return None;
                }
                (head, Some(tail))
            }
            None => (body, None),
        };

        let head_words = parse_fields(head, tail.is_none())?;
        let words = match tail {
            None => {
                if head_words.len() != 8 {
                    return None;
                }
                let mut words = [0u16; 8];
                words.copy_from_slice(&head_words);
                words
            }
            Some(tail) => {
                let tail_words = parse_fields(tail, true)?;
                // the compression marker must stand for at least one group
                if head_words.len() + tail_words.len() >= 8 {
                    return None;
                }
                let mut words = [0u16; 8];
                words[..head_words.len()].copy_from_slice(&head_words);
                words[8 - tail_words.len()..].copy_from_slice(&tail_words);
                words
            }
        };

        Some(Self::from_words(words, scope))
    }

    /// Builds the netmask whose leading `prefix` bits are ones.
    pub fn from_prefix(prefix: u32) -> Result<Self, AddrError> {
        if prefix > Family::V6.max_prefix() {
            return Err(AddrError::InvalidPrefix {
                prefix,
                family: Family::V6,
            });
        }
        let value = match prefix {
            0 => 0,
            n => u128::MAX << (128 - n),
        };
        Ok(Self::new(value.to_be_bytes(), 0))
    }

    /// Number of leading one bits. Meaningful only when the payload is a
    /// left-aligned contiguous netmask; no validation is performed.
    pub fn prefix_len(&self) -> u32 {
        self.value().leading_ones()
    }

    pub fn is_wildcard(&self) -> bool {
        self.value() == 0
    }

    /// IPv6 has no broadcast addresses.
    pub fn is_broadcast(&self) -> bool {
        false
    }

    /// `::1`
    pub fn is_loopback(&self) -> bool {
        self.value() == 1
    }

    /// ff00::/8 (with flag bits masked per the reference behavior)
    pub fn is_multicast(&self) -> bool {
        self.words()[0] & 0xFFE0 == 0xFF00
    }

    /// fe80::/10
    pub fn is_link_local(&self) -> bool {
        self.words()[0] & 0xFFE0 == 0xFE80
    }

    /// fec0::/10 (deprecated site-local unicast block)
    pub fn is_site_local(&self) -> bool {
        self.words()[0] & 0xFFE0 == 0xFEC0
    }

    /// First 96 bits zero: `::a.b.c.d` form.
    pub fn is_ipv4_compatible(&self) -> bool {
        self.octets[..12].iter().all(|&b| b == 0)
    }

    /// `::ffff:a.b.c.d` form.
    pub fn is_ipv4_mapped(&self) -> bool {
        self.octets[..10].iter().all(|&b| b == 0) && self.words()[5] == 0xFFFF
    }

    pub fn is_well_known_mc(&self) -> bool {
        self.words()[0] & 0xFFF0 == 0xFF00
    }

    pub fn is_node_local_mc(&self) -> bool {
        self.words()[0] & 0xFFEF == 0xFF01
    }

    pub fn is_link_local_mc(&self) -> bool {
        self.words()[0] & 0xFFEF == 0xFF02
    }

    pub fn is_site_local_mc(&self) -> bool {
        self.words()[0] & 0xFFEF == 0xFF05
    }

    pub fn is_org_local_mc(&self) -> bool {
        self.words()[0] & 0xFFEF == 0xFF08
    }

    pub fn is_global_mc(&self) -> bool {
        self.words()[0] & 0xFFEF == 0xFF0F
    }

    // Binary results keep the left-hand operand's zone.

    pub fn and(&self, other: &Self) -> Self {
        Self::new((self.value() & other.value()).to_be_bytes(), self.scope)
    }

    pub fn or(&self, other: &Self) -> Self {
        Self::new((self.value() | other.value()).to_be_bytes(), self.scope)
    }

    pub fn xor(&self, other: &Self) -> Self {
        Self::new((self.value() ^ other.value()).to_be_bytes(), self.scope)
    }

    pub fn complement(&self) -> Self {
        Self::new((!self.value()).to_be_bytes(), self.scope)
    }
}

impl Ord for Ipv6Repr {
    /// Zone id orders before byte content: addresses in different zones are
    /// distinct regardless of their bits.
    fn cmp(&self, other: &Self) -> Ordering {
        self.scope
            .cmp(&other.scope)
            .then_with(|| self.octets.cmp(&other.octets))
    }
}

impl PartialOrd for Ipv6Repr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ipv6Repr {
    /// Canonical compressed form: the leftmost longest run of two or more
    /// zero groups collapses to `::`, IPv4-mapped addresses keep their
    /// dotted-quad tail, and a nonzero zone is appended as `%scope`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ipv4_mapped() {
            let [a, b, c, d] = [
                self.octets[12],
                self.octets[13],
                self.octets[14],
                self.octets[15],
            ];
            write!(f, "::ffff:{a}.{b}.{c}.{d}")?;
        } else {
            let words = self.words();
            match longest_zero_run(&words) {
                Some((start, len)) => {
                    write_words(f, &words[..start])?;
                    f.write_str("::")?;
                    write_words(f, &words[start + len..])?;
                }
                None => write_words(f, &words)?,
            }
        }
        if self.scope != 0 {
            write!(f, "%{}", self.scope)?;
        }
        Ok(())
    }
}

fn write_words(f: &mut fmt::Formatter<'_>, words: &[u16]) -> fmt::Result {
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            f.write_str(":")?;
        }
        write!(f, "{word:x}")?;
    }
    Ok(())
}

/// Leftmost longest run of zero groups, if any run spans at least two. A
/// single zero group is written out rather than compressed.
fn longest_zero_run(words: &[u16; 8]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start = 0;
    let mut run_len = 0;
    for (i, word) in words.iter().enumerate() {
        if *word == 0 {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len > best.map_or(1, |(_, len)| len) {
                best = Some((run_start, run_len));
            }
        } else {
            run_len = 0;
        }
    }
    best
}

/// Splits a trailing `%zone` off the literal. Zones are numeric scope ids;
/// interface names belong to the OS boundary and are rejected here.
fn split_zone(s: &str) -> Option<(&str, u32)> {
    match s.rsplit_once('%') {
        None => Some((s, 0)),
        Some((body, zone)) => {
            if zone.is_empty() || !zone.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            Some((body, zone.parse().ok()?))
        }
    }
}

/// Parses one colon-separated side of the literal into 16-bit groups. A
/// dotted quad may stand in the final position when `v4_tail_allowed`,
/// contributing the last two groups.
fn parse_fields(part: &str, v4_tail_allowed: bool) -> Option<Vec<u16>> {
    if part.is_empty() {
        return Some(Vec::new());
    }
    let fields: Vec<&str> = part.split(':').collect();
    let mut words = Vec::with_capacity(fields.len() + 1);
    for (i, field) in fields.iter().enumerate() {
        let last = i + 1 == fields.len();
        if field.contains('.') {
            if !last || !v4_tail_allowed {
                return None;
            }
            let quad = Ipv4Repr::parse(field)?.octets();
            words.push(u16::from_be_bytes([quad[0], quad[1]]));
            words.push(u16::from_be_bytes([quad[2], quad[3]]));
        } else {
            words.push(parse_hextet(field)?);
        }
    }
    if words.len() > 8 {
        return None;
    }
    Some(words)
}

/// One group of 1-4 hex digits.
fn parse_hextet(field: &str) -> Option<u16> {
    if field.is_empty() || field.len() > 4 {
        return None;
    }
    let mut value = 0u16;
    for b in field.bytes() {
        value = value * 16 + (b as char).to_digit(16)? as u16;
    }
    Some(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
