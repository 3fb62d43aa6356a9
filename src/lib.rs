//! # gutenberg-gate
//!
//! SSRF-safe validation of Project Gutenberg URLs.
//!
//! `gutenberg-gate` decides whether an untrusted URL may be fetched and which
//! book it names. It does not make HTTP requests or resolve DNS. It only looks
//! at the URL itself: scheme, host literal, trusted domain and path shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use gutenberg_gate::validate;
//!
//! let result = validate("http://www.gutenberg.org/cache/epub/84/pg84-images.html");
//! assert!(result.is_valid());
//! assert_eq!(
//!     result.normalized_url(),
//!     Some("https://www.gutenberg.org/cache/epub/84/pg84-images.html")
//! );
//! assert_eq!(result.resource_id(), Some("84"));
//!
//! let result = validate("https://127.0.0.1/cache/epub/84/pg84-images.html");
//! assert!(!result.is_valid());
//! ```
//!
//! Fetch only the normalized URL, never the raw input. Callers that care about
//! DNS rebinding must also check the resolved address when they connect.

mod allowlist;
mod blocklist;
mod error;
mod result;
mod safe_url;
mod shape;
mod validate;

pub use error::{Error, ErrorKind, EXAMPLE_URL};
pub use result::{SiteType, ValidationResult};
pub use safe_url::SafeUrl;
pub use shape::UrlShape;
pub use validate::{extract_resource_id, is_valid_url, validate, validate_url, Validated};
