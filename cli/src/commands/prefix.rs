use colored::*;
use ipkit_core::{Family, IpAddress};

use crate::terminal::{colors, print};

pub fn prefix(length: u32, family: Family) -> anyhow::Result<()> {
    let netmask = IpAddress::from_prefix(length, family)?;

    print::aligned_line("Prefix", format!("/{length}"));
    print::aligned_line("Family", family);
    print::aligned_line("Netmask", netmask.to_string().color(colors::ACCENT));
    print::aligned_line("Host mask", (!netmask).to_string());
    print::end_of_program();
    Ok(())
}
