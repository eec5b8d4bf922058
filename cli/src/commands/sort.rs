use crate::terminal::print;

pub fn sort(addrs: &[String]) -> anyhow::Result<()> {
    let mut parsed = Vec::with_capacity(addrs.len());
    for text in addrs {
        parsed.push(super::parse_arg(text, None)?);
    }
    parsed.sort();

    for (idx, addr) in parsed.iter().enumerate() {
        print::tree_head(idx + 1, &format!("{} ({})", addr, addr.family()));
    }
    print::end_of_program();
    Ok(())
}
