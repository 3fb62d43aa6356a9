//! The validation result returned across the crate boundary.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, ErrorKind};
use crate::validate::Validated;

/// The hosting site a validated URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteType {
    Gutenberg,
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gutenberg => f.write_str("gutenberg"),
        }
    }
}

/// Outcome of [`validate`](crate::validate) for one input.
///
/// Either valid (normalized URL, site type and resource id present, no error)
/// or invalid (error present, everything else absent). The fields are private
/// so no other combination can be built.
///
/// Serializes as a JSON object with the fields `isValid`, `error`,
/// `normalizedUrl`, `siteType` and `resourceId`; absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip)]
    error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    site_type: Option<SiteType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_id: Option<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// User-facing message describing why the URL was rejected.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }

    /// The URL to fetch instead of the raw input. Always https.
    pub fn normalized_url(&self) -> Option<&str> {
        self.normalized_url.as_deref()
    }

    pub fn site_type(&self) -> Option<SiteType> {
        self.site_type
    }

    /// The numeric book id.
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }
}

impl From<Validated> for ValidationResult {
    fn from(v: Validated) -> Self {
        Self {
            is_valid: true,
            error: None,
            error_kind: None,
            normalized_url: Some(v.url),
            site_type: Some(v.site),
            resource_id: Some(v.resource_id),
        }
    }
}

impl From<Error> for ValidationResult {
    fn from(e: Error) -> Self {
        Self {
            is_valid: false,
            error: Some(e.to_string()),
            error_kind: Some(e.kind()),
            normalized_url: None,
            site_type: None,
            resource_id: None,
        }
    }
}

impl From<Result<Validated, Error>> for ValidationResult {
    fn from(result: Result<Validated, Error>) -> Self {
        match result {
            Ok(v) => v.into(),
            Err(e) => e.into(),
        }
    }
}
