//! Class-name synthesis for generated view classes.
//!
//! A view's class name comes from its relative path, then its file path, and
//! finally from a checksum of its content when the document has no path at all.
//! The result is always a legal type identifier in the generated language.

use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};

/// Extension stripped from template paths before sanitization.
pub const TEMPLATE_EXTENSION: &str = ".cshtml";

/// Prefix of class names derived from content checksums.
pub const FALLBACK_PREFIX: &str = "AspNetCore";

const UTF8_PREAMBLE: [u8; 3] = [0xEF, 0xBB, 0xBF];

lazy_static! {
    static ref LEGAL_IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Derive the class name for a document.
///
/// Never fails: every input maps to a non-empty identifier made of ASCII
/// letters, digits and underscores that does not start with a digit.
pub fn synthesize(
    relative_path: Option<&str>,
    file_path: Option<&str>,
    source_content: &str,
) -> String {
    let selected = relative_path
        .filter(|p| !p.is_empty())
        .or_else(|| file_path.filter(|p| !p.is_empty()));

    let stem = selected.map(strip_template_extension).unwrap_or("");
    if stem.is_empty() {
        return checksum_class_name(source_content);
    }

    let mut name = sanitize(stem);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// Replace every character that cannot appear in an identifier with `_`.
///
/// The mapping is one-for-one per character; runs are not collapsed.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Lowercase hex SHA-256 of the UTF-8 encoded source, including the encoding preamble.
pub fn source_checksum(source: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(UTF8_PREAMBLE);
    hasher.update(source.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn is_legal_identifier(name: &str) -> bool {
    LEGAL_IDENTIFIER.is_match(name)
}

fn checksum_class_name(source: &str) -> String {
    format!("{}_{}", FALLBACK_PREFIX, source_checksum(source))
}

fn strip_template_extension(path: &str) -> &str {
    let cut = path.len().saturating_sub(TEMPLATE_EXTENSION.len());
    match path.get(cut..) {
        Some(tail) if tail.eq_ignore_ascii_case(TEMPLATE_EXTENSION) => &path[..cut],
        _ => path,
    }
}
