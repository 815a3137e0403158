use iprange_common::AddressError;
use iprange_common::network::resolve::{
    self, NoDnsResolver, SystemResolver, primary_address_with, resolve_host_with,
};
use iprange_integration_tests::{StaticResolver, ip};

#[test]
fn literal_ip_is_returned_without_lookup() {
    let resolver = StaticResolver::new();

    assert_eq!(resolve_host_with(&resolver, "203.0.113.9").unwrap(), vec![ip("203.0.113.9")]);
    assert_eq!(primary_address_with(&resolver, "203.0.113.9").unwrap(), ip("203.0.113.9"));
    assert_eq!(resolver.lookups(), 0);
}

#[test]
fn literal_ip_through_system_resolver() {
    assert_eq!(resolve::resolve_host("127.0.0.1").unwrap(), vec![ip("127.0.0.1")]);
    assert_eq!(resolve::primary_address("10.20.30.40").unwrap(), ip("10.20.30.40"));
}

#[test]
fn ipv4_answers_keep_resolver_order() {
    let resolver = StaticResolver::new().answer(
        "edge.example.test",
        &["2001:db8::10", "198.51.100.20", "::ffff:198.51.100.5", "198.51.100.1"],
    );

    let ips = resolve_host_with(&resolver, "edge.example.test").unwrap();
    assert_eq!(ips, vec![ip("198.51.100.20"), ip("198.51.100.5"), ip("198.51.100.1")]);

    let primary = primary_address_with(&resolver, "edge.example.test").unwrap();
    assert_eq!(primary, ip("198.51.100.20"));
    assert_eq!(resolver.lookups(), 2);
}

#[test]
fn ipv6_only_hosts_fail_resolution() {
    let resolver = StaticResolver::new().answer("v6.example.test", &["2001:db8::1"]);

    let err = resolve_host_with(&resolver, "v6.example.test").unwrap_err();
    assert!(err.is_resolution());
    assert_eq!(err.to_string(), "no IP addresses found for host: v6.example.test");

    let err = primary_address_with(&resolver, "v6.example.test").unwrap_err();
    assert!(err.is_resolution());
}

#[test]
fn unknown_host_fails_resolution() {
    let resolver = StaticResolver::new();

    let err = resolve_host_with(&resolver, "nowhere.example.test").unwrap_err();
    assert!(matches!(err, AddressError::Resolution { ref host, .. } if host == "nowhere.example.test"));
}

#[test]
fn no_dns_refuses_names() {
    assert_eq!(resolve_host_with(&NoDnsResolver, "10.0.0.1").unwrap(), vec![ip("10.0.0.1")]);

    let err = resolve_host_with(&NoDnsResolver, "localhost").unwrap_err();
    assert!(matches!(err, AddressError::Resolution { .. }));
}

#[test]
fn reserved_tld_never_resolves() {
    let err = resolve_host_with(&SystemResolver, "no-such-host.invalid").unwrap_err();
    assert!(err.is_resolution(), "{err}");
}
