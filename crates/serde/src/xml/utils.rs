//! Utility functions for XML names and text formatting.

/// Checks whether `name` can be used as an XML element or attribute name.
///
/// The first character must be a letter or underscore; the rest may be
/// letters, digits, `_`, `-` or `.`. Namespace prefixes are not used by the
/// target schema and are rejected.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Converts a Rust boolean to its string representation for XML.
pub fn bool_to_string(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}
