use anyhow::Context;
use colored::*;
use ipkit_core::wire;

use crate::terminal::{colors, print};

pub fn encode(text: &str) -> anyhow::Result<()> {
    let addr = super::parse_arg(text, None)?;
    let encoded = wire::to_vec(&addr);

    print::aligned_line("Address", addr.to_string());
    print::aligned_line("Encoded", hex_string(&encoded).color(colors::ACCENT));
    if addr.scope() != 0 {
        print::print_status("The zone id is not part of the wire format and was dropped.");
    }
    print::end_of_program();
    Ok(())
}

pub fn decode(hex: &str) -> anyhow::Result<()> {
    let bytes = parse_hex(hex)?;
    let addr = wire::decode(&mut bytes.as_slice())?;

    print::aligned_line("Input", hex_string(&bytes));
    print::aligned_line("Decoded", addr.to_string().color(colors::ACCENT));
    print::aligned_line("Family", addr.family());
    print::end_of_program();
    Ok(())
}

pub fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Accepts hex pairs with optional whitespace or `:` separators.
fn parse_hex(s: &str) -> anyhow::Result<Vec<u8>> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace() && *c != ':').collect();
    anyhow::ensure!(
        cleaned.len() % 2 == 0,
        "hex dump has an odd number of digits"
    );
    (0..cleaned.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&cleaned[i..i + 2], 16)
                .with_context(|| format!("invalid hex pair {:?}", &cleaned[i..i + 2]))
        })
        .collect()
}
