use std::net::IpAddr;

use iprange_common::AddressError;
use iprange_common::network::address::{is_address, is_range, parse_range, range_contains};
use iprange_common::network::range::{IpRange, enumerate_range, to_range};
use iprange_integration_tests::ip;

#[test]
fn address_and_range_predicates() {
    assert!(is_address("192.168.1.1"));
    assert!(!is_address("192.168.1.256"));
    assert!(!is_address("not-an-ip"));

    assert!(is_range("10.0.0.0/8"));
    assert!(!is_range("10.0.0.0"));

    assert!(range_contains("192.168.1.5", "192.168.1.0/24"));
    assert!(!range_contains("192.168.2.5", "192.168.1.0/24"));
    assert!(!range_contains("bad", "192.168.1.0/24"));
}

#[test]
fn malformed_range_reads_as_not_contained() {
    assert!(!range_contains("10.0.0.1", "10.0.0.0"));
    assert!(!is_range("10.0.0.0"));
}

#[test]
fn enumerate_slash_24() {
    let hosts: Vec<IpAddr> = enumerate_range("10.0.0.0/24").unwrap();

    assert_eq!(hosts.len(), 254);
    assert_eq!(hosts.first(), Some(&ip("10.0.0.1")));
    assert_eq!(hosts.last(), Some(&ip("10.0.0.254")));
    assert!(hosts.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn enumerated_hosts_sit_strictly_inside_the_block() {
    let cidr = "192.168.40.0/22";
    let hosts = enumerate_range(cidr).unwrap();
    let network = parse_range(cidr).unwrap();

    assert_eq!(hosts.len(), 1022);
    assert!(!hosts.contains(&ip("192.168.40.0")));
    assert!(!hosts.contains(&ip("192.168.43.255")));
    assert!(hosts.iter().all(|host| range_contains(&host.to_string(), &network.to_string())));
}

#[test]
fn enumerate_tiny_blocks() {
    assert_eq!(enumerate_range("10.0.0.0/30").unwrap(), vec![ip("10.0.0.1"), ip("10.0.0.2")]);
    assert!(enumerate_range("10.0.0.0/31").unwrap().is_empty());
    assert!(enumerate_range("10.0.0.0/32").unwrap().is_empty());
}

#[test]
fn enumerate_rejects_non_cidr() {
    let err = enumerate_range("10.0.0.0").unwrap_err();
    assert!(matches!(err, AddressError::InvalidRange(_)));
    assert_eq!(err.to_string(), "invalid CIDR range: 10.0.0.0");
}

#[test]
fn to_range_normalizes() {
    assert_eq!(to_range("10.0.0.1").unwrap(), parse_range("10.0.0.1/32").unwrap());
    assert_eq!(to_range("10.0.0.0/24").unwrap().to_string(), "10.0.0.0/24");
    assert!(to_range("garbage").is_none());
}

#[test]
fn to_range_feeds_enumeration() {
    let network = to_range("172.16.9.200/29").unwrap();
    let hosts: Vec<IpAddr> = IpRange::from(&network).hosts().collect();

    assert_eq!(network.to_string(), "172.16.9.200/29");
    assert_eq!(hosts, enumerate_range("172.16.9.200/29").unwrap());
    assert_eq!(hosts.len(), 6);
}
