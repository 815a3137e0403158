use iprange_common::network::address;
use tracing::warn;

use crate::terminal::print;

pub fn contains(addr: &str, range: &str) {
    // range_contains folds bad input into `false`, so point it out here.
    if !address::is_address(addr) {
        warn!("{addr} is not a valid address");
    }
    if !address::is_range(range) {
        warn!("{range} is not a valid CIDR range");
    }

    print::print(&address::range_contains(addr, range).to_string());
}
