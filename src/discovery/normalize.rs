//! Identifier and image URL normalization.
//!
//! The sparse provider reports alphanumeric external ids ("tt" + 7-8 digits)
//! and absolute-but-often-malformed poster URLs; the rich provider reports
//! numeric ids and relative image paths. Everything funnels through here so
//! the rest of the layer only sees canonical integers and valid https URLs.

use url::Url;

/// Placeholder the sparse provider uses for absent fields.
const NOT_AVAILABLE: &str = "N/A";

/// Convert an external identifier to the canonical numeric id by stripping
/// the "tt" prefix and parsing the digits. Yields `0` when the suffix does
/// not parse; callers treat `0` as unresolved and filter such records.
pub fn canonical_id(external: &str) -> i64 {
    let digits = external.strip_prefix("tt").unwrap_or(external);
    digits.parse().unwrap_or(0)
}

/// Build a well-formed external identifier from a numeric id, zero-padding
/// to the provider's expected 7-digit width. Ids already carrying the
/// prefix should be passed through unchanged by the caller.
pub fn external_id(id: i64) -> String {
    format!("tt{id:07}")
}

/// Ensure a raw identifier is in external form, whichever way it arrived.
pub fn ensure_external_id(raw: &str) -> String {
    if raw.starts_with("tt") {
        raw.to_string()
    } else {
        format!("tt{:0>7}", raw)
    }
}

/// Normalize a raw poster/backdrop URL to an absolute https URL.
///
/// Trims whitespace, rejects the "N/A" sentinel and empty strings, upgrades
/// scheme-relative and schemeless values, downgrades plain http to https,
/// then requires the result to parse as a URL. Idempotent on its own output.
pub fn normalize_image_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
        return None;
    }

    let fixed = if let Some(rest) = trimmed.strip_prefix("http://") {
        format!("https://{rest}")
    } else if trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if let Some(rest) = trimmed.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        format!("https://{trimmed}")
    };

    match Url::parse(&fixed) {
        Ok(_) => Some(fixed),
        Err(_) => None,
    }
}
