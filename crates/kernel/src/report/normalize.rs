//! Canonical string normalization for comparisons.
//!
//! Every equality or substring comparison in the pipeline, and every
//! distinct-value derivation, goes through these functions so that
//! whitespace and case variants collapse to one logical value.

use serde_json::Value;

use crate::listing::value_to_text;

/// Canonical comparison form of a string: trimmed and lowercased.
///
/// Idempotent and infallible.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Canonical comparison form of a raw field value.
///
/// Missing and null values become the empty string; everything else is the
/// value's text form, trimmed and lowercased.
pub fn normalize_value(value: Option<&Value>) -> String {
    match value.and_then(value_to_text) {
        Some(text) => normalize(&text),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize("  Austin "), "austin");
        assert_eq!(normalize("CAFE"), "cafe");
    }

    #[test]
    fn idempotent() {
        for s in ["  Mixed Case  ", "already normal", "", " \t "] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn missing_and_null_become_empty() {
        assert_eq!(normalize_value(None), "");
        assert_eq!(normalize_value(Some(&Value::Null)), "");
    }

    #[test]
    fn non_string_values_use_text_form() {
        assert_eq!(normalize_value(Some(&serde_json::json!(42))), "42");
        assert_eq!(normalize_value(Some(&serde_json::json!(true))), "true");
    }
}
