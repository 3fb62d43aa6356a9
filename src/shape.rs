//! Accepted Project Gutenberg URL shapes.

use std::sync::LazyLock;

use regex::Regex;

/// The published URL shapes that identify a book's HTML edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlShape {
    /// `/cache/epub/{id}/pg{id}-images.html`
    CachedEpub,
    /// `/files/{id}/{id}-h/{id}-h.htm`
    FilesHtml,
    /// `/ebooks/{id}.html.images`
    EbookPage,
}

struct ShapeRule {
    shape: UrlShape,
    pattern: &'static str,
    /// Index of the capture group holding the book id.
    id_group: usize,
}

/// Tried in order; the first match wins.
const SHAPE_RULES: &[ShapeRule] = &[
    ShapeRule {
        shape: UrlShape::CachedEpub,
        pattern: r"(?i)^https?://(www\.)?gutenberg\.org/cache/epub/([0-9]+)/pg[0-9]+-images\.html?$",
        id_group: 2,
    },
    ShapeRule {
        shape: UrlShape::FilesHtml,
        pattern: r"(?i)^https?://(www\.)?gutenberg\.org/files/([0-9]+)/[0-9]+-h/[0-9]+-h\.html?$",
        id_group: 2,
    },
    ShapeRule {
        shape: UrlShape::EbookPage,
        pattern: r"(?i)^https?://(www\.)?gutenberg\.org/ebooks/([0-9]+)\.html\.images$",
        id_group: 2,
    },
];

static COMPILED_SHAPES: LazyLock<Vec<(&'static ShapeRule, Regex)>> = LazyLock::new(|| {
    SHAPE_RULES
        .iter()
        .map(|rule| (rule, Regex::new(rule.pattern).unwrap()))
        .collect()
});

/// A URL that matched one of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMatch {
    pub shape: UrlShape,
    pub resource_id: String,
}

/// Match a canonical URL string against the accepted shapes.
pub fn match_shape(canonical: &str) -> Option<ShapeMatch> {
    COMPILED_SHAPES.iter().find_map(|(rule, re)| {
        let captured = re.captures(canonical)?.get(rule.id_group)?.as_str();
        let resource_id = leading_digits(captured)?;
        Some(ShapeMatch {
            shape: rule.shape,
            resource_id: resource_id.to_string(),
        })
    })
}

/// First run of ASCII digits in `s`.
fn leading_digits(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}
