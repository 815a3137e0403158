mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, contains, hosts, normalize, resolve};
use iprange_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_dns: commands.no_dns,
        quiet: commands.quiet,
    };

    logging::init_logging(&cfg);

    match commands.command {
        Commands::Check { input } => {
            print::header("checking input", cfg.quiet);
            check::check(&input);
            Ok(())
        }
        Commands::Contains { address, range } => {
            print::header("membership test", cfg.quiet);
            contains::contains(&address, &range);
            Ok(())
        }
        Commands::Hosts { range, limit } => {
            print::header("enumerating hosts", cfg.quiet);
            hosts::hosts(&range, limit, &cfg)
        }
        Commands::Normalize { item } => {
            print::header("normalizing", cfg.quiet);
            normalize::normalize(&item)
        }
        Commands::Resolve { host, primary } => {
            print::header("resolving host", cfg.quiet);
            resolve::resolve(&host, primary, &cfg)
        }
    }
}
