//! # ipkit-core
//!
//! A family-polymorphic IP address value type: one uniform interface over
//! IPv4 and IPv6 for parsing, classification, network arithmetic, total
//! ordering, and a compact binary wire encoding.
//!
//! ## Modules
//! * **[`addr`]**: the [`IpAddress`] enum and everything dispatched from it.
//! * **[`family`]**: the [`Family`] tag and its derived properties.
//! * **[`v4`] / [`v6`]**: the per-family payloads, grammars and predicates.
//! * **[`wire`]**: the length-prefixed binary codec.
//! * **[`interop`]**: conversions at the `std::net` boundary.
//! * **[`error`]**: the [`AddrError`] taxonomy.
//!
//! Every value is immutable and every operation is pure: no I/O, no
//! allocation in the representation, safe to share across threads.

pub mod addr;
pub mod error;
pub mod family;
pub mod interop;
pub mod v4;
pub mod v6;
pub mod wire;

pub use addr::IpAddress;
pub use error::AddrError;
pub use family::Family;
