use std::time::Instant;

use anyhow::Context;
use colored::*;
use iprange_common::AddressError;
use iprange_common::config::Config;
use iprange_common::network::address;
use iprange_common::network::range::IpRange;
use pnet::ipnetwork::IpNetwork;

use crate::terminal::{format, print};

pub fn hosts(range: &str, limit: Option<usize>, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let network: IpNetwork = address::parse_range(range)
        .ok_or_else(|| AddressError::InvalidRange(range.to_string()))
        .with_context(|| format!("cannot list hosts of '{range}'"))?;

    let block: IpRange = IpRange::from(&network);

    let mut listed: usize = 0;
    for ip in block.hosts().take(limit.unwrap_or(usize::MAX)) {
        print::print(&format::ip(&ip).to_string());
        listed += 1;
    }

    let listed_str: ColoredString = listed.to_string().bold().green();
    let usable_str: ColoredString = format::usable_count(&block).bold().green();
    let total_time: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();
    print::summary(
        &format!(
            "Listed {listed_str} of {usable_str} usable hosts in {} ({total_time})",
            format::network(&network)
        ),
        cfg.quiet,
    );

    Ok(())
}
