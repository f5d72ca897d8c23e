//! Format-preserving masking transforms for scalar values.
//!
//! Transforms here are pure string/number rewrites: they do not traverse
//! structures or decide what is sensitive. Traversal and sensitivity
//! decisions live in the scrubbing walk, which calls into this module at
//! each leaf it targets.

use serde_json::Number;

/// Character used to mask alphanumeric content.
pub const MASK_CHAR: char = '*';

/// Placeholder emitted in place of a masked boolean.
pub const BOOL_PLACEHOLDER: &str = "-";

/// Masks every ASCII alphanumeric character in `value` with [`MASK_CHAR`],
/// leaving punctuation, whitespace, and overall length unchanged.
///
/// ```rust
/// assert_eq!(jsonscrub::policy::mask_text("123-45-6789"), "***-**-****");
/// ```
pub fn mask_text(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { MASK_CHAR } else { c })
        .collect()
}

/// Canonical printed form of a JSON number.
///
/// Integral values print with no decimal point regardless of how they were
/// stored (`5`, `5.0`, and `5e0` all print as `5`); everything else uses the
/// shortest decimal representation.
pub fn canonical_number(value: &Number) -> String {
    if value.is_i64() || value.is_u64() {
        return value.to_string();
    }
    match value.as_f64() {
        Some(f) if f == f.trunc() => format!("{f:.0}"),
        Some(f) => format!("{f}"),
        None => value.to_string(),
    }
}

/// Masks the canonical printed form of `value`: every digit becomes
/// [`MASK_CHAR`], while the sign and decimal point stay in place as literal
/// characters.
///
/// The result is a string, so a masked number field changes JSON type from
/// number to string until it is restored.
pub fn mask_number(value: &Number) -> String {
    canonical_number(value)
        .chars()
        .map(|c| if c.is_ascii_digit() { MASK_CHAR } else { c })
        .collect()
}
