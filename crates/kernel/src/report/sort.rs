//! Stable field sorting over normalized string keys.

use crate::listing::Record;

use super::normalize::normalize_value;
use super::types::SortOrder;

/// Return a new sequence ordered by `field`.
///
/// Comparison is lexicographic over normalized strings — including for
/// numeric-looking fields such as review counts, where `"10" < "2" < "9"`.
/// The report has always ordered these columns textually and consumers
/// expect it.
///
/// Records whose keys compare equal keep their input order in both
/// directions: descending reverses the comparison, not the sequence.
/// `field = None` is the identity.
pub fn sort(records: &[Record], field: Option<&str>, order: SortOrder) -> Vec<Record> {
    let mut sorted = records.to_vec();
    let Some(field) = field else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let a_key = normalize_value(a.field(field));
        let b_key = normalize_value(b.field(field));
        match order {
            SortOrder::Asc => a_key.cmp(&b_key),
            SortOrder::Desc => b_key.cmp(&a_key),
        }
    });

    sorted
}
