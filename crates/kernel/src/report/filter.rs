//! Record filtering: exact city match and category substring match.

use crate::listing::Record;

use super::normalize::{normalize, normalize_value};

/// Apply the city and category predicates to a record slice.
///
/// A non-empty `selected_city` keeps records whose normalized city equals
/// the normalized selection; a non-empty `category_text` keeps records whose
/// normalized category contains the normalized text. Empty values impose no
/// constraint. The predicates are ANDed, so the result set is the same
/// regardless of which is applied first.
pub fn filter(records: &[Record], selected_city: &str, category_text: &str) -> Vec<Record> {
    let city = normalize(selected_city);
    let category = normalize(category_text);

    records
        .iter()
        .filter(|r| city.is_empty() || normalize_value(r.field("city")) == city)
        .filter(|r| category.is_empty() || normalize_value(r.field("category")).contains(&category))
        .cloned()
        .collect()
}
