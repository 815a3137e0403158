use std::net::IpAddr;

use anyhow::Context;
use colored::*;
use iprange_common::config::Config;
use iprange_common::network::resolve::{self, NoDnsResolver, Resolver, SystemResolver};

use crate::terminal::{format, print};

pub fn resolve(host: &str, primary: bool, cfg: &Config) -> anyhow::Result<()> {
    let resolver: Box<dyn Resolver> = if cfg.no_dns {
        Box::new(NoDnsResolver)
    } else {
        Box::new(SystemResolver)
    };

    if primary {
        let ip: IpAddr = resolve::primary_address_with(&resolver, host)
            .with_context(|| format!("no primary address for '{host}'"))?;
        print::print(&format::ip(&ip).to_string());
        return Ok(());
    }

    let ips: Vec<IpAddr> = resolve::resolve_host_with(&resolver, host)
        .with_context(|| format!("cannot resolve '{host}'"))?;

    for ip in &ips {
        print::print(&format::ip(ip).to_string());
    }

    let count: ColoredString = ips.len().to_string().bold().green();
    let unit: &str = if ips.len() == 1 { "address" } else { "addresses" };
    print::summary(&format!("Found {count} {unit} for {}", host.bold()), cfg.quiet);

    Ok(())
}
