use colored::*;
use iprange_common::network::address;
use tracing::warn;

use crate::terminal::{format, print};

pub fn check(input: &str) {
    let parsed_address = address::parse_address(input);
    let parsed_range = address::parse_range(input);

    let address_value: ColoredString = match &parsed_address {
        Some(ip) => format!("{} ({})", format::yes_no(true), format::ip_kind(ip)).normal(),
        None => format::yes_no(false),
    };
    print::key_value("Address", address_value);

    let range_value: ColoredString = match &parsed_range {
        Some(network) => format!("{} ({})", format::yes_no(true), format::network(network)).normal(),
        None => format::yes_no(false),
    };
    print::key_value("Range", range_value);

    if parsed_address.is_none() && parsed_range.is_none() {
        warn!("{input} is neither an address nor a CIDR range");
    }
}
