use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressError {
    /// The input is not in `address/prefix` notation.
    #[error("invalid CIDR range: {0}")]
    InvalidRange(String),

    /// The prefix is wider than the address family allows.
    #[error("invalid prefix: {prefix} > {max}")]
    InvalidPrefix { prefix: u8, max: u8 },

    /// The resolver could not answer for the host.
    #[error("could not get IP for host: {host}")]
    Resolution {
        host: String,
        #[source]
        source: io::Error,
    },

    /// The resolver answered, but with no IPv4 addresses.
    #[error("no IP addresses found for host: {0}")]
    NoIpv4Address(String),

    /// An address list that should hold at least one entry was empty.
    #[error("no address available for host: {0}")]
    NoAddress(String),
}

impl AddressError {
    /// Whether the error came out of a host lookup.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            AddressError::Resolution { .. } | AddressError::NoIpv4Address(_)
        )
    }
}
