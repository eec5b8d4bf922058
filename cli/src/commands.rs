pub mod codec;
pub mod inspect;
pub mod mask;
pub mod prefix;
pub mod sort;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ipkit_core::{Family, IpAddress};

#[derive(Parser)]
#[command(name = "ipkit")]
#[command(about = "Inspect and transform IP address values.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an address and report everything known about it
    #[command(alias = "i")]
    Inspect {
        addr: String,
        /// Parse strictly as this family (v4 or v6)
        #[arg(long)]
        family: Option<Family>,
    },
    /// Build a netmask from a prefix length
    #[command(alias = "p")]
    Prefix {
        length: u32,
        /// Address family of the mask (v4 or v6)
        #[arg(long, default_value = "v4")]
        family: Family,
    },
    /// Apply a netmask, optionally overlaying host bits from another address
    #[command(alias = "m")]
    Mask {
        addr: String,
        netmask: String,
        /// Address providing the host bits
        #[arg(long)]
        set: Option<String>,
    },
    /// Encode an address into the wire format
    #[command(alias = "e")]
    Encode { addr: String },
    /// Decode a hex dump of the wire format
    #[command(alias = "d")]
    Decode { hex: String },
    /// Sort addresses by the total order
    #[command(alias = "s")]
    Sort { addrs: Vec<String> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses a positional address argument, strictly when a family was given.
pub(crate) fn parse_arg(text: &str, family: Option<Family>) -> anyhow::Result<IpAddress> {
    let parsed = match family {
        Some(family) => IpAddress::parse_family(text, family),
        None => IpAddress::parse(text),
    };
    parsed.with_context(|| format!("failed to parse address {text:?}"))
}
