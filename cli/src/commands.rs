pub mod check;
pub mod contains;
pub mod hosts;
pub mod normalize;
pub mod resolve;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "iprange")]
#[command(about = "Address and CIDR range helpers.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Never query DNS, only accept literal addresses as hosts
    #[arg(long, global = true)]
    pub no_dns: bool,

    /// Less output: -q hides headers, -qq also hides summaries
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tell whether the input is an address, a CIDR range, or neither
    #[command(alias = "c")]
    Check { input: String },
    /// Test whether an address lies inside a CIDR range
    #[command(alias = "in")]
    Contains { address: String, range: String },
    /// List the usable host addresses of a CIDR range
    #[command(alias = "h")]
    Hosts {
        range: String,
        /// Stop after this many addresses
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Turn an address or CIDR range into its network form
    #[command(alias = "n")]
    Normalize { item: String },
    /// Resolve a host name to its IPv4 addresses
    #[command(alias = "r")]
    Resolve {
        host: String,
        /// Only print the first address
        #[arg(short, long)]
        primary: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_well_formed() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn parses_aliases_and_global_flags() {
        let cli = CommandLine::try_parse_from(["iprange", "h", "10.0.0.0/24", "-l", "5", "-qq"]).unwrap();
        assert_eq!(cli.quiet, 2);
        assert!(matches!(
            cli.command,
            Commands::Hosts { ref range, limit: Some(5) } if range == "10.0.0.0/24"
        ));

        let cli = CommandLine::try_parse_from(["iprange", "--no-dns", "r", "example.com", "--primary"]).unwrap();
        assert!(cli.no_dns);
        assert!(matches!(cli.command, Commands::Resolve { primary: true, .. }));
    }
}
