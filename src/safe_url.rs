//! Safe URL parsing and normalization.

use url::{Host, Url};

use crate::Error;

/// A parsed URL whose scheme is known to be http or https.
///
/// This is the state of an input after the blank, syntax and scheme checks,
/// but before any address, host or shape rule has been applied. Use
/// [`validate_url`](crate::validate_url) for the full pipeline.
#[derive(Debug, Clone)]
pub struct SafeUrl {
    inner: Url,
    host: String,
}

impl SafeUrl {
    /// Parse an untrusted URL string.
    ///
    /// This performs:
    /// - Rejection of empty or whitespace-only input
    /// - WHATWG URL parsing (which also canonicalizes octal, hex, decimal and
    ///   short-form IPv4 hosts to dotted quads)
    /// - Scheme validation (only http/https allowed)
    /// - Hostname normalization (lowercase, no trailing dot)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Blank`], [`Error::InvalidFormat`] or
    /// [`Error::UnsupportedScheme`].
    pub fn parse(input: &str) -> Result<Self, Error> {
        if input.trim().is_empty() {
            return Err(Error::Blank);
        }

        let url = Url::parse(input).map_err(|e| Error::invalid_format(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(Error::unsupported_scheme(scheme)),
        }

        let host = url
            .host_str()
            .ok_or_else(|| Error::invalid_format("URL must have a host"))?;

        let host = normalize_host(host)?;

        Ok(Self { inner: url, host })
    }

    /// Get the normalized hostname. IPv6 literals keep their brackets.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the host as the parser classified it (domain, IPv4 or IPv6).
    pub fn host_kind(&self) -> Option<Host<&str>> {
        self.inner.host()
    }

    /// Check if the URL carries userinfo (`user:pass@`).
    pub fn has_credentials(&self) -> bool {
        !self.inner.username().is_empty() || self.inner.password().is_some()
    }

    /// Check if the URL uses HTTPS.
    pub fn is_https(&self) -> bool {
        self.inner.scheme() == "https"
    }

    /// Get the canonical serialization of the URL.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

/// Normalize a hostname: lowercase, remove trailing dot.
fn normalize_host(host: &str) -> Result<String, Error> {
    let mut normalized = host.to_lowercase();

    // FQDN notation
    if normalized.ends_with('.') {
        normalized.pop();
    }

    if normalized.is_empty() {
        return Err(Error::invalid_format("empty hostname"));
    }

    Ok(normalized)
}
