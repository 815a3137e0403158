//! # Address Range Model
//!
//! Continuous, inclusive spans of addresses and the CIDR host enumeration built on them.
//!
//! A CIDR block maps to an [`IpRange`] covering its network through broadcast
//! address. [`IpRange::hosts`] then strips those two ends, which is what
//! [`enumerate_range`] collects.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ops::RangeInclusive;

use pnet::ipnetwork::IpNetwork;
use tracing::debug;

use crate::error::AddressError;
use crate::network::address;

const V4_BITS: u8 = 32;
const V6_BITS: u8 = 128;

/// Represents a continuous range of IPv4 addresses, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        self.bounds().map(Ipv4Addr::from)
    }

    pub fn len(&self) -> u64 {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        if start > end {
            0
        } else {
            u64::from(end - start) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_addr > self.end_addr
    }

    fn bounds(&self) -> RangeInclusive<u32> {
        u32::from(self.start_addr)..=u32::from(self.end_addr)
    }
}

/// Represents a continuous range of IPv6 addresses, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv6Range {
    pub start_addr: Ipv6Addr,
    pub end_addr: Ipv6Addr,
}

impl Ipv6Range {
    pub fn new(start_addr: Ipv6Addr, end_addr: Ipv6Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv6Addr> + Clone {
        self.bounds().map(Ipv6Addr::from)
    }

    /// Saturates at `u128::MAX` for `::/0`.
    pub fn len(&self) -> u128 {
        let start: u128 = u128::from(self.start_addr);
        let end: u128 = u128::from(self.end_addr);
        if start > end {
            0
        } else {
            (end - start).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_addr > self.end_addr
    }

    fn bounds(&self) -> RangeInclusive<u128> {
        u128::from(self.start_addr)..=u128::from(self.end_addr)
    }
}

/// A range of either address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpRange {
    V4(Ipv4Range),
    V6(Ipv6Range),
}

impl IpRange {
    /// Every address in the range, ascending.
    pub fn iter(&self) -> IpRangeIter {
        match self {
            IpRange::V4(range) => IpRangeIter::V4(range.bounds()),
            IpRange::V6(range) => IpRangeIter::V6(range.bounds()),
        }
    }

    /// Usable hosts: the range without its first and last address.
    ///
    /// Ranges holding fewer than three addresses have no usable hosts.
    pub fn hosts(&self) -> IpRangeIter {
        let mut iter = self.iter();
        iter.next();
        iter.next_back();
        iter
    }

    pub fn len(&self) -> u128 {
        match self {
            IpRange::V4(range) => u128::from(range.len()),
            IpRange::V6(range) => range.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            IpRange::V4(range) => range.is_empty(),
            IpRange::V6(range) => range.is_empty(),
        }
    }
}

impl From<&IpNetwork> for IpRange {
    fn from(network: &IpNetwork) -> Self {
        match network {
            IpNetwork::V4(net) => {
                let (start, end) = v4_bounds(u32::from(net.ip()), net.prefix());
                IpRange::V4(Ipv4Range::new(Ipv4Addr::from(start), Ipv4Addr::from(end)))
            }
            IpNetwork::V6(net) => {
                let (start, end) = v6_bounds(u128::from(net.ip()), net.prefix());
                IpRange::V6(Ipv6Range::new(Ipv6Addr::from(start), Ipv6Addr::from(end)))
            }
        }
    }
}

/// Iterator over the addresses of an [`IpRange`].
#[derive(Debug, Clone)]
pub enum IpRangeIter {
    V4(RangeInclusive<u32>),
    V6(RangeInclusive<u128>),
}

impl Iterator for IpRangeIter {
    type Item = IpAddr;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            IpRangeIter::V4(bounds) => bounds.next().map(|n| IpAddr::V4(Ipv4Addr::from(n))),
            IpRangeIter::V6(bounds) => bounds.next().map(|n| IpAddr::V6(Ipv6Addr::from(n))),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            IpRangeIter::V4(bounds) => bounds.size_hint(),
            IpRangeIter::V6(bounds) => bounds.size_hint(),
        }
    }
}

impl DoubleEndedIterator for IpRangeIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            IpRangeIter::V4(bounds) => bounds.next_back().map(|n| IpAddr::V4(Ipv4Addr::from(n))),
            IpRangeIter::V6(bounds) => bounds.next_back().map(|n| IpAddr::V6(Ipv6Addr::from(n))),
        }
    }
}

/// Creates a range from an IP and a CIDR prefix (e.g., 192.168.1.0/24).
///
/// Returns the range covering the entire network block.
pub fn cidr_range(ip: IpAddr, prefix: u8) -> Result<IpRange, AddressError> {
    match ip {
        IpAddr::V4(ip) => {
            if prefix > V4_BITS {
                return Err(AddressError::InvalidPrefix { prefix, max: V4_BITS });
            }
            let (start, end) = v4_bounds(u32::from(ip), prefix);
            Ok(IpRange::V4(Ipv4Range::new(
                Ipv4Addr::from(start),
                Ipv4Addr::from(end),
            )))
        }
        IpAddr::V6(ip) => {
            if prefix > V6_BITS {
                return Err(AddressError::InvalidPrefix { prefix, max: V6_BITS });
            }
            let (start, end) = v6_bounds(u128::from(ip), prefix);
            Ok(IpRange::V6(Ipv6Range::new(
                Ipv6Addr::from(start),
                Ipv6Addr::from(end),
            )))
        }
    }
}

fn v4_bounds(ip: u32, prefix: u8) -> (u32, u32) {
    let mask: u32 = u32::MAX
        .checked_shl(u32::from(V4_BITS - prefix))
        .unwrap_or(0);
    let network = ip & mask;
    (network, network | !mask)
}

fn v6_bounds(ip: u128, prefix: u8) -> (u128, u128) {
    let mask: u128 = u128::MAX
        .checked_shl(u32::from(V6_BITS - prefix))
        .unwrap_or(0);
    let network = ip & mask;
    (network, network | !mask)
}

/// Expands a CIDR string into its usable host addresses, ascending.
///
/// The network and broadcast addresses are left out, so `/31` and `/32`
/// (or `/127` and `/128`) produce an empty list. IPv4-mapped hosts come back in
/// their IPv4 form.
pub fn enumerate_range(range: &str) -> Result<Vec<IpAddr>, AddressError> {
    let network: IpNetwork = address::parse_range(range)
        .ok_or_else(|| AddressError::InvalidRange(range.to_string()))?;

    let hosts: Vec<IpAddr> = IpRange::from(&network)
        .hosts()
        .map(|ip| ip.to_canonical())
        .collect();
    debug!("Enumerated {} hosts in {network}", hosts.len());

    Ok(hosts)
}

/// Normalizes an address or CIDR string into a network.
///
/// A bare address becomes a single-host network (`/32` or `/128`). CIDR input
/// comes back masked. Anything else yields `None`.
pub fn to_range(item: &str) -> Option<IpNetwork> {
    if let Some(ip) = address::parse_address(item) {
        let prefix: u8 = match ip {
            IpAddr::V4(_) => V4_BITS,
            IpAddr::V6(_) => V6_BITS,
        };
        return IpNetwork::new(ip, prefix).ok();
    }

    address::parse_range(item)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
