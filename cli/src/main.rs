mod commands;
mod terminal;

use commands::{CommandLine, Commands, codec, inspect, mask, prefix, sort};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Inspect { addr, family } => {
            terminal::print::header("address report");
            inspect::inspect(&addr, family)
        }
        Commands::Prefix { length, family } => {
            terminal::print::header("netmask from prefix");
            prefix::prefix(length, family)
        }
        Commands::Mask { addr, netmask, set } => {
            terminal::print::header("applying netmask");
            mask::mask(&addr, &netmask, set.as_deref())
        }
        Commands::Encode { addr } => {
            terminal::print::header("wire encoding");
            codec::encode(&addr)
        }
        Commands::Decode { hex } => {
            terminal::print::header("wire decoding");
            codec::decode(&hex)
        }
        Commands::Sort { addrs } => {
            terminal::print::header("sorted addresses");
            sort::sort(&addrs)
        }
    }
}
