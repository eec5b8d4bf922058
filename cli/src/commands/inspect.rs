use colored::*;
use ipkit_core::{Family, IpAddress, wire};

use crate::commands::codec::hex_string;
use crate::terminal::{colors, print};

pub fn inspect(text: &str, family: Option<Family>) -> anyhow::Result<()> {
    let addr = super::parse_arg(text, family)?;

    let addr_color = match addr.family() {
        Family::V4 => colors::IPV4_ADDR,
        Family::V6 => colors::IPV6_ADDR,
    };
    print::aligned_line("Address", addr.to_string().color(addr_color));
    print::aligned_line("Family", addr.family());
    print::aligned_line("Raw bytes", hex_string(addr.as_bytes()));
    print::aligned_line("Scope", addr.scope());
    print::aligned_line("Prefix length", format!("/{}", addr.prefix_len()));
    print::aligned_line("Wire form", hex_string(&wire::to_vec(&addr)));

    print::print_status("Classification");
    print::as_tree_one_level(classification(&addr));
    print::end_of_program();
    Ok(())
}

fn classification(addr: &IpAddress) -> Vec<(String, ColoredString)> {
    let mut rows: Vec<(&str, bool)> = vec![
        ("wildcard", addr.is_wildcard()),
        ("broadcast", addr.is_broadcast()),
        ("loopback", addr.is_loopback()),
        ("multicast", addr.is_multicast()),
        ("unicast", addr.is_unicast()),
        ("link-local", addr.is_link_local()),
        ("site-local", addr.is_site_local()),
        ("v4-compatible", addr.is_ipv4_compatible()),
        ("v4-mapped", addr.is_ipv4_mapped()),
    ];

    if addr.is_multicast() {
        rows.extend([
            ("well-known mc", addr.is_well_known_mc()),
            ("node-local mc", addr.is_node_local_mc()),
            ("link-local mc", addr.is_link_local_mc()),
            ("site-local mc", addr.is_site_local_mc()),
            ("org-local mc", addr.is_org_local_mc()),
            ("global mc", addr.is_global_mc()),
        ]);
    }

    rows.into_iter()
        .map(|(label, verdict)| {
            let value: ColoredString = if verdict {
                "yes".color(colors::PRIMARY)
            } else {
                "no".dimmed()
            };
            (label.to_string(), value)
        })
        .collect()
}
