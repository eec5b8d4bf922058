use std::fmt;
use std::str::FromStr;

use crate::error::AddrError;

/// Address family discriminant.
///
/// The payload length and the maximum prefix width are properties of the
/// tag, never re-derived from buffer sizes elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Raw payload length in bytes: 4 for IPv4, 16 for IPv6.
    pub const fn len(self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 16,
        }
    }

    /// Widest valid netmask prefix: 32 for IPv4, 128 for IPv6.
    pub const fn max_prefix(self) -> u32 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

impl FromStr for Family {
    type Err = AddrError;

    /// Parses a family selector as used on textual boundaries (CLI flags,
    /// config values). Accepted spellings: "4", "v4", "ipv4" / "6", "v6",
    /// "ipv6", case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "4" | "v4" | "ipv4" => Ok(Family::V4),
            "6" | "v6" | "ipv6" => Ok(Family::V6),
            _ => Err(AddrError::InvalidFamily(s.to_string())),
        }
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
