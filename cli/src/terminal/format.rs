use std::net::{IpAddr, Ipv6Addr};

use colored::*;
use iprange_common::network::range::IpRange;
use pnet::ipnetwork::IpNetwork;

const IPV4_ADDR: Color = Color::BrightBlue;
const IPV6_ADDR: Color = Color::BrightCyan;
const NETWORK: Color = Color::BrightMagenta;

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

// 2000::/3
fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    (0x20..=0x3F).contains(&first_byte)
}

pub fn ip_kind(ip: &IpAddr) -> &'static str {
    match ip {
        IpAddr::V4(_) => "IPv4",
        IpAddr::V6(ipv6_addr) => ipv6_to_type_str(ipv6_addr),
    }
}

pub fn ip(ip: &IpAddr) -> ColoredString {
    match ip {
        IpAddr::V4(_) => ip.to_string().color(IPV4_ADDR),
        IpAddr::V6(_) => ip.to_string().color(IPV6_ADDR),
    }
}

pub fn network(network: &IpNetwork) -> ColoredString {
    network.to_string().color(NETWORK)
}

/// Address count of a range. `::/0` holds one more address than `u128` reaches.
pub fn address_count(block: &IpRange) -> String {
    if is_whole_v6(block) {
        String::from("2^128")
    } else {
        block.len().to_string()
    }
}

/// Usable host count of a range (everything but the first and last address).
pub fn usable_count(block: &IpRange) -> String {
    if is_whole_v6(block) {
        String::from("2^128 - 2")
    } else {
        block.len().saturating_sub(2).to_string()
    }
}

fn is_whole_v6(block: &IpRange) -> bool {
    matches!(
        block,
        IpRange::V6(range) if u128::from(range.start_addr) == 0 && u128::from(range.end_addr) == u128::MAX
    )
}

pub fn yes_no(value: bool) -> ColoredString {
    if value { "yes".green().bold() } else { "no".red().bold() }
}
