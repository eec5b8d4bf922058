use thiserror::Error;

use crate::family::Family;

/// Reasons an address value could not be constructed or combined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrError {
    /// The text matched neither the IPv4 nor the IPv6 grammar.
    #[error("invalid address literal: {0:?}")]
    InvalidFormat(String),
    /// The textual family selector named an unknown family.
    #[error("invalid or unsupported address family: {0:?}")]
    InvalidFamily(String),
    /// A raw payload was neither 4 nor 16 bytes long.
    #[error("invalid raw address length {0}, expected 4 or 16 bytes")]
    InvalidLength(usize),
    /// The requested prefix length exceeds the family's bit width.
    #[error("prefix length {prefix} out of range for {family} (max {})", .family.max_prefix())]
    InvalidPrefix { prefix: u32, family: Family },
    /// A binary bitwise operator was applied across families.
    #[error("family mismatch: {lhs} vs {rhs}")]
    FamilyMismatch { lhs: Family, rhs: Family },
}
