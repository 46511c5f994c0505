//! Report controller: query state machine driving recomputation.

use std::sync::Arc;

use tracing::debug;

use crate::listing::Record;

use super::cities::distinct_cities;
use super::filter::filter;
use super::pager::paginate;
use super::sort::sort;
use super::types::{Query, ReportPage, SortOrder};

/// Owns the loaded record set and the user's query, recomputing the derived
/// view from scratch after every transition.
///
/// Transitions are synchronous and not reentrant: callers must let one
/// transition complete — yielding a fresh `ReportPage` — before issuing the
/// next. The record set is constant for the controller's lifetime, so the
/// city index is derived once at construction.
pub struct ReportController {
    records: Arc<Vec<Record>>,
    cities: Vec<String>,
    query: Query,
    filtered_sorted: Vec<Record>,
    page: ReportPage,
}

impl ReportController {
    /// Create a controller over `records` with the default query: no city,
    /// no category text, no sort, page 1.
    pub fn new(records: Vec<Record>) -> Self {
        let records = Arc::new(records);
        let cities = distinct_cities(&records);
        let query = Query::default();
        let filtered_sorted = records.as_ref().clone();
        let page = paginate(&filtered_sorted, query.page);

        Self {
            records,
            cities,
            query,
            filtered_sorted,
            page,
        }
    }

    /// Select a city filter (empty clears it). Resets to page 1.
    pub fn set_city(&mut self, city: impl Into<String>) -> &ReportPage {
        self.query.selected_city = city.into();
        self.query.page = 1;
        self.recompute()
    }

    /// Clear the city filter. Resets to page 1.
    pub fn clear_city(&mut self) -> &ReportPage {
        self.set_city("")
    }

    /// Set the category search text (empty clears it). Resets to page 1.
    pub fn set_category_text(&mut self, text: impl Into<String>) -> &ReportPage {
        self.query.category_text = text.into();
        self.query.page = 1;
        self.recompute()
    }

    /// Toggle sorting on `field`: repeating the active field flips the
    /// direction, a new field starts ascending. The current page is kept.
    pub fn toggle_sort(&mut self, field: impl Into<String>) -> &ReportPage {
        let field = field.into();
        if self.query.sort_field.as_deref() == Some(field.as_str()) {
            self.query.sort_order = self.query.sort_order.flipped();
        } else {
            self.query.sort_field = Some(field);
            self.query.sort_order = SortOrder::Asc;
        }
        self.recompute()
    }

    /// Move to `page` if it lies within `[1, page_count]` for the current
    /// filters; out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: u32) -> &ReportPage {
        if (1..=self.page.page_count).contains(&page) {
            self.query.page = page;
            self.recompute()
        } else {
            debug!(
                page,
                page_count = self.page.page_count,
                "page out of range, ignoring"
            );
            &self.page
        }
    }

    /// Current query state, for reflecting selection and sort affordances.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The current derived page.
    pub fn page(&self) -> &ReportPage {
        &self.page
    }

    /// The full filtered, sorted sequence (not just the visible page), for
    /// the spreadsheet-export collaborator.
    pub fn filtered_sorted(&self) -> &[Record] {
        &self.filtered_sorted
    }

    /// Distinct, sorted city labels for the city selector.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Recompute the derived view from the record set and current query.
    ///
    /// Recompute-from-scratch is the correctness baseline: no incremental
    /// update is attempted. Afterwards the page invariant holds — `page` is
    /// clamped into `[1, page_count]` in case a filter change shrank the
    /// result set.
    fn recompute(&mut self) -> &ReportPage {
        let filtered = filter(
            &self.records,
            &self.query.selected_city,
            &self.query.category_text,
        );
        self.filtered_sorted = sort(
            &filtered,
            self.query.sort_field.as_deref(),
            self.query.sort_order,
        );

        let mut page = paginate(&self.filtered_sorted, self.query.page);
        if self.query.page > page.page_count {
            self.query.page = page.page_count;
            page = paginate(&self.filtered_sorted, self.query.page);
        }
        self.page = page;

        debug!(
            city = %self.query.selected_city,
            category = %self.query.category_text,
            sort = ?self.query.sort_field,
            page = self.query.page,
            total = self.page.total,
            "report recomputed"
        );

        &self.page
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn listings() -> Vec<Record> {
        vec![
            record(serde_json::json!({"name": "A", "city": "Austin", "category": "Cafe"})),
            record(serde_json::json!({"name": "B", "city": "austin ", "category": "Bakery"})),
            record(serde_json::json!({"name": "C", "city": "Dallas", "category": "Cafe"})),
        ]
    }

    #[test]
    fn initial_state_shows_everything() {
        let controller = ReportController::new(listings());

        assert_eq!(controller.query(), &Query::default());
        assert_eq!(controller.page().total, 3);
        assert_eq!(controller.page().page_count, 1);
        assert_eq!(controller.cities(), ["Austin", "Dallas"]);
    }

    #[test]
    fn set_city_filters_and_resets_page() {
        let mut controller = ReportController::new(listings());

        let page = controller.set_city("Austin");
        assert_eq!(page.total, 2);
        assert_eq!(controller.query().page, 1);
    }

    #[test]
    fn clear_city_restores_full_set() {
        let mut controller = ReportController::new(listings());
        controller.set_city("Dallas");
        assert_eq!(controller.page().total, 1);

        controller.clear_city();
        assert_eq!(controller.page().total, 3);
        assert_eq!(controller.query().selected_city, "");
    }

    #[test]
    fn toggle_sort_flips_and_resets_direction() {
        let mut controller = ReportController::new(listings());

        controller.toggle_sort("name");
        assert_eq!(controller.query().sort_field.as_deref(), Some("name"));
        assert_eq!(controller.query().sort_order, SortOrder::Asc);

        controller.toggle_sort("name");
        assert_eq!(controller.query().sort_order, SortOrder::Desc);

        // A different field starts ascending again.
        controller.toggle_sort("city");
        assert_eq!(controller.query().sort_field.as_deref(), Some("city"));
        assert_eq!(controller.query().sort_order, SortOrder::Asc);
    }

    #[test]
    fn filter_change_clamps_page_within_bounds() {
        // 25 records across 3 pages, then a filter that leaves none.
        let records: Vec<Record> = (0..25)
            .map(|i| record(serde_json::json!({"name": format!("r{i}"), "city": "Austin"})))
            .collect();
        let mut controller = ReportController::new(records);

        controller.go_to_page(3);
        assert_eq!(controller.query().page, 3);

        let page = controller.set_city("Nowhere");
        assert_eq!(page.total, 0);
        assert_eq!(page.page_count, 1);
        assert_eq!(controller.query().page, 1);
    }

    #[test]
    fn export_accessor_returns_full_filtered_sequence() {
        let records: Vec<Record> = (0..25)
            .map(|i| record(serde_json::json!({"name": format!("r{i}"), "city": "Austin"})))
            .collect();
        let mut controller = ReportController::new(records);

        controller.set_city("Austin");
        assert_eq!(controller.filtered_sorted().len(), 25);
        assert_eq!(controller.page().page_records.len(), 10);
    }
}
