//! Address and CIDR range helpers shared by the `iprange` binaries.

pub mod config;
pub mod error;
pub mod network;

pub use error::AddressError;
