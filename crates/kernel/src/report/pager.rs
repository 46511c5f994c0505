//! Fixed-size pagination over the filtered, sorted sequence.

use crate::listing::Record;

use super::types::ReportPage;

/// Records shown per page.
pub const PAGE_SIZE: usize = 10;

/// Slice one page out of `records`.
///
/// `page_count` is at least 1 even for an empty sequence. A `page` past the
/// end yields an empty slice while still reporting the true `total`;
/// clamping the page is the controller's responsibility.
pub fn paginate(records: &[Record], page: u32) -> ReportPage {
    let total = records.len();
    let page_count = total.div_ceil(PAGE_SIZE).max(1) as u32;

    let start = (page.max(1) as usize - 1) * PAGE_SIZE;
    let page_records: Vec<Record> = records.iter().skip(start).take(PAGE_SIZE).cloned().collect();

    ReportPage {
        page_records,
        page,
        page_count,
        total,
        has_prev: page > 1,
        has_next: page < page_count,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| serde_json::from_value(serde_json::json!({"name": format!("r{i}")})).unwrap())
            .collect()
    }

    #[test]
    fn empty_sequence_still_has_one_page() {
        let page = paginate(&[], 1);

        assert_eq!(page.page_count, 1);
        assert_eq!(page.total, 0);
        assert!(page.page_records.is_empty());
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn partial_last_page() {
        let all = records(25);
        let page = paginate(&all, 3);

        assert_eq!(page.page_count, 3);
        assert_eq!(page.total, 25);
        assert_eq!(page.page_records.len(), 5);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn exact_multiple_of_page_size() {
        let all = records(20);
        assert_eq!(paginate(&all, 1).page_count, 2);
    }

    #[test]
    fn pages_concatenate_to_the_full_sequence() {
        let all = records(25);
        let page_count = paginate(&all, 1).page_count;

        let mut seen = Vec::new();
        for page in 1..=page_count {
            seen.extend(paginate(&all, page).page_records);
        }

        assert_eq!(seen, all);
    }

    #[test]
    fn page_past_the_end_is_empty_with_counts() {
        let all = records(25);
        let page = paginate(&all, 4);

        assert!(page.page_records.is_empty());
        assert_eq!(page.total, 25);
        assert_eq!(page.page_count, 3);
    }

    #[test]
    fn prev_next_flags() {
        let all = records(25);

        let first = paginate(&all, 1);
        assert!(!first.has_prev);
        assert!(first.has_next);

        let middle = paginate(&all, 2);
        assert!(middle.has_prev);
        assert!(middle.has_next);
    }
}
