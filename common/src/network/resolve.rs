//! # Host Resolution
//!
//! Turns a host string into the IPv4 addresses it names.
//!
//! Literal addresses short-circuit and never reach a [`Resolver`]. Everything
//! else goes through one, so the lookup can be swapped out (see
//! [`NoDnsResolver`], or a fixed table in tests).

use std::io;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use tracing::{debug, warn};

use crate::error::AddressError;
use crate::network::address;

/// Answers name lookups.
pub trait Resolver: Send + Sync {
    /// Returns every address the name maps to, in the order the resolver gave them.
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// The platform resolver (`getaddrinfo` on unix).
///
/// Blocks until the lookup completes, with no timeout of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs: Vec<IpAddr> = (host, 0)
            .to_socket_addrs()?
            .map(|socket: SocketAddr| socket.ip())
            .collect();
        Ok(addrs)
    }
}

/// Refuses every lookup. Used when DNS is turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDnsResolver;

impl Resolver for NoDnsResolver {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("DNS lookups are disabled, {host} is not a literal address"),
        ))
    }
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        (**self).lookup(host)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        (**self).lookup(host)
    }
}

/// Resolves `target` with the [`SystemResolver`].
pub fn resolve_host(target: &str) -> Result<Vec<IpAddr>, AddressError> {
    resolve_host_with(&SystemResolver, target)
}

/// Resolves `target` to its IPv4 addresses.
///
/// A literal address (of either family) is returned on its own without a lookup.
/// For names, IPv6 answers are dropped; IPv4-mapped ones are kept in their
/// IPv4 form. The result is never empty: a lookup with no IPv4 answers is an
/// [`AddressError::NoIpv4Address`].
pub fn resolve_host_with<R: Resolver + ?Sized>(
    resolver: &R,
    target: &str,
) -> Result<Vec<IpAddr>, AddressError> {
    if let Some(ip) = address::parse_address(target) {
        debug!("Found 1 address for {target}");
        return Ok(vec![ip]);
    }

    let answers: Vec<IpAddr> = resolver.lookup(target).map_err(|source| {
        warn!("Could not get IP for host: {target}");
        AddressError::Resolution {
            host: target.to_string(),
            source,
        }
    })?;

    let ips: Vec<IpAddr> = answers
        .into_iter()
        .filter_map(|ip| match ip.to_canonical() {
            v4 @ IpAddr::V4(_) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .collect();

    if ips.is_empty() {
        warn!("No IPv4 addresses found for host: {target}");
        return Err(AddressError::NoIpv4Address(target.to_string()));
    }

    debug!("Found {} addresses for {target}", ips.len());
    Ok(ips)
}

/// First address of [`resolve_host`].
pub fn primary_address(host: &str) -> Result<IpAddr, AddressError> {
    primary_address_with(&SystemResolver, host)
}

/// First address of [`resolve_host_with`], in resolver order.
pub fn primary_address_with<R: Resolver + ?Sized>(
    resolver: &R,
    host: &str,
) -> Result<IpAddr, AddressError> {
    resolve_host_with(resolver, host)?
        .into_iter()
        .next()
        .ok_or_else(|| AddressError::NoAddress(host.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
