//! The validation pipeline.

use tracing::{debug, trace};

use crate::allowlist::is_trusted_host;
use crate::blocklist::is_private_host;
use crate::error::Error;
use crate::result::{SiteType, ValidationResult};
use crate::safe_url::SafeUrl;
use crate::shape::{match_shape, UrlShape};

/// Result of successful URL validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    /// Normalized URL (https). Fetch this, never the raw input.
    pub url: String,

    /// Site the URL belongs to.
    pub site: SiteType,

    /// Numeric book id.
    pub resource_id: String,

    /// Which accepted shape the URL matched.
    pub shape: UrlShape,
}

/// Validate an untrusted URL and extract the book id.
///
/// Checks run in order and stop at the first failure:
/// 1. Rejects empty input
/// 2. Parses the URL
/// 3. Allows only http/https
/// 4. Blocks private, loopback and link-local host literals and `localhost`
/// 5. Requires the host to be gutenberg.org or a subdomain of it
/// 6. Rejects embedded credentials
/// 7. Matches the canonical URL against the accepted shapes
///
/// On success the scheme is forced to https.
///
/// # Example
///
/// ```rust
/// use gutenberg_gate::validate_url;
///
/// let v = validate_url("http://gutenberg.org/files/84/84-h/84-h.htm").unwrap();
/// assert_eq!(v.url, "https://gutenberg.org/files/84/84-h/84-h.htm");
/// assert_eq!(v.resource_id, "84");
/// ```
///
/// # Errors
///
/// Returns one [`Error`] variant per failed check.
pub fn validate_url(url: &str) -> Result<Validated, Error> {
    let result = run_checks(url);
    match &result {
        Ok(v) => trace!(resource_id = %v.resource_id, shape = ?v.shape, "URL accepted"),
        Err(e) => debug!(kind = ?e.kind(), error = ?e, "URL rejected"),
    }
    result
}

/// Validate an untrusted URL, reporting every outcome as a [`ValidationResult`].
///
/// Never panics, whatever the input.
pub fn validate(url: &str) -> ValidationResult {
    validate_url(url).into()
}

/// Check if a URL passes validation.
pub fn is_valid_url(url: &str) -> bool {
    validate_url(url).is_ok()
}

/// Extract the book id from a URL, or `None` if the URL is rejected.
pub fn extract_resource_id(url: &str) -> Option<String> {
    validate_url(url).ok().map(|v| v.resource_id)
}

fn run_checks(url: &str) -> Result<Validated, Error> {
    let safe_url = SafeUrl::parse(url)?;

    if let Some(reason) = safe_url.host_kind().as_ref().and_then(is_private_host) {
        return Err(Error::private_address(safe_url.host(), reason));
    }

    if !is_trusted_host(safe_url.host()) {
        return Err(Error::untrusted_host(safe_url.host()));
    }

    if safe_url.has_credentials() {
        return Err(Error::Credentials);
    }

    let matched = match_shape(safe_url.as_str()).ok_or(Error::UnsupportedShape)?;

    Ok(Validated {
        url: force_https(safe_url.as_str()),
        site: SiteType::Gutenberg,
        resource_id: matched.resource_id,
        shape: matched.shape,
    })
}

/// Upgrade an http URL to https. https is left alone.
fn force_https(canonical: &str) -> String {
    match canonical.strip_prefix("http:") {
        Some(rest) => format!("https:{}", rest),
        None => canonical.to_string(),
    }
}
