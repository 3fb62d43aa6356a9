//! Private and internal address rules.
//!
//! These are checked against the host literal in the URL. No DNS resolution
//! happens here: a caller that dereferences the URL must re-check the
//! resolved address at connect time if DNS rebinding is a concern.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use ipnet::{Ipv4Net, Ipv6Net};
use url::Host;

/// Hostnames that always denote the local machine.
const BLOCKED_HOSTNAMES: &[&str] = &["localhost"];

const BLOCKED_IPV4: &[(&str, &str)] = &[
    ("127.0.0.0/8", "loopback address (127.0.0.0/8)"),
    ("10.0.0.0/8", "private address (10.0.0.0/8)"),
    ("172.16.0.0/12", "private address (172.16.0.0/12)"),
    ("192.168.0.0/16", "private address (192.168.0.0/16)"),
    ("169.254.0.0/16", "link-local address (169.254.0.0/16)"),
    ("0.0.0.0/8", "current network address (0.0.0.0/8)"),
];

const BLOCKED_IPV6: &[(&str, &str)] = &[
    ("::/128", "unspecified address (::)"),
    ("::1/128", "loopback address (::1)"),
    ("fe80::/10", "link-local address (fe80::/10)"),
    ("fc00::/7", "unique local address (fc00::/7)"),
];

static IPV4_RULES: LazyLock<Vec<(Ipv4Net, &'static str)>> = LazyLock::new(|| {
    BLOCKED_IPV4
        .iter()
        .map(|&(net, reason)| (net.parse().unwrap(), reason))
        .collect()
});

static IPV6_RULES: LazyLock<Vec<(Ipv6Net, &'static str)>> = LazyLock::new(|| {
    BLOCKED_IPV6
        .iter()
        .map(|&(net, reason)| (net.parse().unwrap(), reason))
        .collect()
});

/// Check if a parsed host is a private or internal address.
///
/// Returns the reason if blocked.
pub fn is_private_host(host: &Host<&str>) -> Option<&'static str> {
    match host {
        Host::Ipv4(ip) => is_ipv4_blocked(*ip),
        Host::Ipv6(ip) => is_ipv6_blocked(*ip),
        Host::Domain(name) => is_hostname_blocked(name),
    }
}

fn is_hostname_blocked(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    let name = name.strip_suffix('.').unwrap_or(name.as_str());
    BLOCKED_HOSTNAMES
        .iter()
        .any(|&blocked| name == blocked)
        .then_some("localhost")
}

fn is_ipv4_blocked(ip: Ipv4Addr) -> Option<&'static str> {
    IPV4_RULES
        .iter()
        .find(|(net, _)| net.contains(&ip))
        .map(|&(_, reason)| reason)
}

fn is_ipv6_blocked(ip: Ipv6Addr) -> Option<&'static str> {
    // ::ffff:a.b.c.d reaches the IPv4 host
    if let Some(ipv4) = ip.to_ipv4_mapped() {
        return is_ipv4_blocked(ipv4);
    }

    IPV6_RULES
        .iter()
        .find(|(net, _)| net.contains(&ip))
        .map(|&(_, reason)| reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(s: &str) -> Option<&'static str> {
        is_private_host(&Host::Ipv4(s.parse().unwrap()))
    }

    fn v6(s: &str) -> Option<&'static str> {
        is_private_host(&Host::Ipv6(s.parse().unwrap()))
    }

    fn domain(s: &str) -> Option<&'static str> {
        is_private_host(&Host::Domain(s))
    }

    #[test]
    fn test_rule_tables_parse() {
        assert_eq!(IPV4_RULES.len(), BLOCKED_IPV4.len());
        assert_eq!(IPV6_RULES.len(), BLOCKED_IPV6.len());
    }

    #[test]
    fn test_localhost_blocked() {
        assert!(domain("localhost").is_some());
        assert!(domain("LOCALHOST").is_some());
        assert!(domain("localhost.").is_some());
        assert!(domain("gutenberg.org").is_none());
        assert!(domain("localhost.gutenberg.org").is_none());
    }

    #[test]
    fn test_loopback_full_range() {
        assert!(v4("127.0.0.0").is_some());
        assert!(v4("127.0.0.1").is_some());
        assert!(v4("127.1.2.3").is_some());
        assert!(v4("127.255.255.255").is_some());
    }

    #[test]
    fn test_all_private_ranges() {
        assert!(v4("10.0.0.1").is_some());
        assert!(v4("10.255.255.255").is_some());
        assert!(v4("172.16.0.1").is_some());
        assert!(v4("172.31.255.255").is_some());
        assert!(v4("192.168.0.1").is_some());
        assert!(v4("192.168.255.255").is_some());
        assert!(v4("169.254.169.254").is_some());
        assert!(v4("0.0.0.0").is_some());
        assert!(v4("0.1.2.3").is_some());
    }

    #[test]
    fn test_range_boundaries() {
        assert!(v4("9.255.255.255").is_none());
        assert!(v4("11.0.0.0").is_none());
        assert!(v4("172.15.255.255").is_none());
        assert!(v4("172.32.0.0").is_none());
        assert!(v4("192.167.255.255").is_none());
        assert!(v4("192.169.0.0").is_none());
        assert!(v4("169.253.255.255").is_none());
        assert!(v4("1.0.0.0").is_none());
    }

    #[test]
    fn test_public_ipv4_allowed() {
        assert!(v4("93.184.216.34").is_none());
        assert!(v4("8.8.8.8").is_none());
    }

    #[test]
    fn test_ipv6_rules() {
        assert!(v6("::").is_some());
        assert!(v6("::1").is_some());
        assert!(v6("0:0:0:0:0:0:0:1").is_some());
        assert!(v6("fe80::1").is_some());
        assert!(v6("FE80::abcd:1234").is_some());
        assert!(v6("febf::1").is_some());
        assert!(v6("fc00::1").is_some());
        assert!(v6("fd00::1").is_some());
        assert!(v6("fd12:3456:789a::1").is_some());
        assert!(v6("fdff:ffff:ffff:ffff:ffff:ffff:ffff:ffff").is_some());
    }

    #[test]
    fn test_public_ipv6_allowed() {
        assert!(v6("2001:db8::1").is_none());
        assert!(v6("2001:4860:4860::8888").is_none());
        assert!(v6("fec0::1").is_none());
    }

    #[test]
    fn test_ipv4_mapped_ipv6() {
        assert!(v6("::ffff:127.0.0.1").is_some());
        assert!(v6("::ffff:7f00:1").is_some());
        assert!(v6("::ffff:192.168.1.1").is_some());
        assert!(v6("::ffff:169.254.169.254").is_some());
        assert!(v6("::ffff:93.184.216.34").is_none());
    }

    #[test]
    fn test_reason_names_the_range() {
        assert_eq!(v4("127.0.0.1"), Some("loopback address (127.0.0.0/8)"));
        assert_eq!(v6("fd00::1"), Some("unique local address (fc00::/7)"));
    }
}
