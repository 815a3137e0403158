use anyhow::Context;
use colored::*;
use iprange_common::network::range::{self, IpRange};

use crate::terminal::{format, print};

pub fn normalize(item: &str) -> anyhow::Result<()> {
    let network = range::to_range(item)
        .with_context(|| format!("'{item}' is neither an address nor a CIDR range"))?;
    let block = IpRange::from(&network);

    print::key_value("Network", format::network(&network));
    print::key_value("Prefix", network.prefix().to_string().normal());
    print::key_value("Addresses", format::address_count(&block).normal());
    if let Some(first) = block.iter().next() {
        print::key_value("First", format::ip(&first));
    }
    if let Some(last) = block.iter().next_back() {
        print::key_value("Last", format::ip(&last));
    }

    Ok(())
}
