//! Distinct city index for the city selector.

use std::collections::HashSet;

use crate::listing::Record;

use super::normalize::normalize;

/// Distinct, sorted city labels across `records`.
///
/// Labels are trimmed but keep their original casing, so the selector shows
/// canonical-looking values while the filter itself matches case-insensitively.
/// Duplicates that differ only by case or surrounding whitespace collapse to
/// the first-encountered casing, which keeps the list deterministic for a
/// given record order. Empty cities are dropped.
pub fn distinct_cities(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cities = Vec::new();

    for record in records {
        let Some(raw) = record.field_text("city") else {
            continue;
        };
        let label = raw.trim();
        if label.is_empty() {
            continue;
        }
        if seen.insert(normalize(label)) {
            cities.push(label.to_string());
        }
    }

    cities.sort();
    cities
}
