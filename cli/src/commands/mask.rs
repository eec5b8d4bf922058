use colored::*;

use crate::terminal::{colors, print};

pub fn mask(addr: &str, netmask: &str, set: Option<&str>) -> anyhow::Result<()> {
    let addr = super::parse_arg(addr, None)?;
    let netmask = super::parse_arg(netmask, None)?;

    print::aligned_line("Address", addr.to_string());
    print::aligned_line(
        "Netmask",
        format!("{} (/{})", netmask, netmask.prefix_len()),
    );

    let result = match set {
        Some(set_text) => {
            let set = super::parse_arg(set_text, None)?;
            print::aligned_line("Host bits", set.to_string());
            addr.mask_with(&netmask, &set)?
        }
        None => addr.mask(&netmask)?,
    };

    print::aligned_line("Result", result.to_string().color(colors::ACCENT));
    print::end_of_program();
    Ok(())
}
