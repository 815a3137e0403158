//! # Address Predicates
//!
//! Parsing guards for textual addresses and CIDR ranges.
//!
//! None of these functions fail: malformed input collapses to `None` or `false`.
//! Callers that need to tell a malformed range apart from an address outside
//! of it should check [`is_range`] first.

use std::net::IpAddr;

use pnet::ipnetwork::{IpNetwork, Ipv4Network};

/// Parses a single IPv4 or IPv6 address.
pub fn parse_address(s: &str) -> Option<IpAddr> {
    s.parse::<IpAddr>().ok()
}

/// Parses CIDR notation like "192.168.1.0/24" into its masked network.
///
/// The host bits are cleared, so "192.168.1.77/24" yields `192.168.1.0/24`.
/// A bare address without `/prefix` is not a range.
pub fn parse_range(s: &str) -> Option<IpNetwork> {
    let (ip_str, prefix_str) = s.split_once('/')?;

    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let ip = parse_address(ip_str)?;
    let prefix = prefix_str.parse::<u8>().ok()?;
    let network = IpNetwork::new(ip, prefix).ok()?;

    IpNetwork::new(network.network(), prefix).ok()
}

pub fn is_address(s: &str) -> bool {
    parse_address(s).is_some()
}

pub fn is_range(s: &str) -> bool {
    parse_range(s).is_some()
}

/// Returns true when `address` lies inside `range`.
///
/// Any parse failure yields `false`.
pub fn range_contains(address: &str, range: &str) -> bool {
    let (Some(address), Some(network)) = (parse_address(address), parse_range(range)) else {
        return false;
    };

    network_contains(&network, address)
}

/// Membership test across families.
///
/// IPv4-mapped networks and addresses are checked in their IPv4 form. Addresses
/// of the other family are never members.
pub fn network_contains(network: &IpNetwork, address: IpAddr) -> bool {
    match (canonical_network(network), address.to_canonical()) {
        (IpNetwork::V4(net), IpAddr::V4(addr)) => net.contains(addr),
        (IpNetwork::V6(net), IpAddr::V6(addr)) => net.contains(addr),
        _ => false,
    }
}

/// Collapses an IPv4-mapped network (`::ffff:a.b.c.d/96` or narrower) into its IPv4 form.
///
/// Every other network is returned as is.
pub fn canonical_network(network: &IpNetwork) -> IpNetwork {
    if let IpNetwork::V6(net) = network
        && net.prefix() >= 96
        && let Some(mapped) = net.ip().to_ipv4_mapped()
        && let Ok(v4_net) = Ipv4Network::new(mapped, net.prefix() - 96)
    {
        return IpNetwork::V4(v4_net);
    }

    *network
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
