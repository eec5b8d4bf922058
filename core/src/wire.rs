//! # Wire Codec
//!
//! Binary layout for shipping addresses between peers:
//!
//! ```text
//! [1 byte: payload length (4 or 16)]
//! [length bytes: raw payload]
//! ```
//!
//! The zone id is never transmitted. A decoded IPv6 address therefore always
//! carries scope 0, whatever the encoder held.

use std::io::{self, Read, Write};

use thiserror::Error;

use crate::addr::IpAddress;
use crate::error::AddrError;

/// Failures while decoding an address from a byte stream.
#[derive(Debug, Error)]
pub enum WireError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Addr(#[from] AddrError),
}

/// Writes the length byte followed by the raw payload.
pub fn encode<W: Write>(addr: &IpAddress, writer: &mut W) -> io::Result<()> {
    writer.write_all(&[addr.len() as u8])?;
    writer.write_all(addr.as_bytes())
}

/// The encoded form as an owned buffer.
pub fn to_vec(addr: &IpAddress) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + addr.len());
    buf.push(addr.len() as u8);
    buf.extend_from_slice(addr.as_bytes());
    buf
}

/// Reads one encoded address. The length byte is validated before the
/// payload read, so a corrupt stream cannot request an oversized buffer.
pub fn decode<R: Read>(reader: &mut R) -> Result<IpAddress, WireError> {
    let mut length = [0u8; 1];
    reader.read_exact(&mut length)?;
    let length = usize::from(length[0]);
    if length != 4 && length != 16 {
        return Err(AddrError::InvalidLength(length).into());
    }
    let mut payload = [0u8; 16];
    reader.read_exact(&mut payload[..length])?;
    Ok(IpAddress::from_raw(&payload[..length])?)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
