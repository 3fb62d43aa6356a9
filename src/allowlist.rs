//! Trusted hostnames.

/// Domains whose hosts (and subdomains) may be fetched.
const TRUSTED_DOMAINS: &[&str] = &["gutenberg.org"];

/// Check if a hostname is a trusted domain or one of its subdomains.
///
/// Matching is on label boundaries: `www.gutenberg.org` is trusted,
/// `gutenberg.org.attacker.com` and `evilgutenberg.org` are not.
pub fn is_trusted_host(host: &str) -> bool {
    let host_lower = host.to_lowercase();
    TRUSTED_DOMAINS.iter().any(|&trusted| {
        host_lower == trusted || host_lower.ends_with(&format!(".{}", trusted))
    })
}
