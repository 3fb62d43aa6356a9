//! Error types for gutenberg-gate.

use serde::Serialize;
use thiserror::Error;

/// Example of an accepted URL, quoted in the unsupported-shape message.
pub const EXAMPLE_URL: &str = "https://www.gutenberg.org/cache/epub/84/pg84-images.html";

/// Reasons a URL can be rejected.
///
/// Each variant has its own fixed message. The fields carry the offending
/// detail for logging and debugging; they are never interpolated into the
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input was empty or whitespace only.
    #[error("no URL supplied")]
    Blank,

    /// Input could not be parsed as a URL.
    #[error("invalid URL format")]
    InvalidFormat { reason: String },

    /// Scheme other than http/https.
    #[error("only http and https URLs are supported")]
    UnsupportedScheme { scheme: String },

    /// Host is a loopback, private, link-local or otherwise internal address.
    #[error("access to private or internal addresses is not allowed")]
    PrivateAddress { host: String, reason: &'static str },

    /// Host is not gutenberg.org or one of its subdomains.
    #[error("only Project Gutenberg (gutenberg.org) URLs are supported")]
    UntrustedHost { host: String },

    /// URL carries userinfo (user:pass@).
    #[error("URLs with embedded credentials are not supported")]
    Credentials,

    /// Scheme, host and address checks passed but the path is not a known shape.
    #[error(
        "no supported Project Gutenberg URL pattern matched; use an HTML book URL such as {example}",
        example = EXAMPLE_URL
    )]
    UnsupportedShape,
}

/// Discriminant of [`Error`], for callers that only care about the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Blank,
    InvalidFormat,
    UnsupportedScheme,
    PrivateAddress,
    UntrustedHost,
    Credentials,
    UnsupportedShape,
}

impl Error {
    pub(crate) fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
        }
    }

    pub(crate) fn private_address(host: impl Into<String>, reason: &'static str) -> Self {
        Self::PrivateAddress {
            host: host.into(),
            reason,
        }
    }

    pub(crate) fn untrusted_host(host: impl Into<String>) -> Self {
        Self::UntrustedHost { host: host.into() }
    }

    /// The cause of this error without its details.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Blank => ErrorKind::Blank,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::UnsupportedScheme { .. } => ErrorKind::UnsupportedScheme,
            Self::PrivateAddress { .. } => ErrorKind::PrivateAddress,
            Self::UntrustedHost { .. } => ErrorKind::UntrustedHost,
            Self::Credentials => ErrorKind::Credentials,
            Self::UnsupportedShape => ErrorKind::UnsupportedShape,
        }
    }
}
