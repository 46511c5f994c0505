//! Report query and derived-view types.

use serde::{Deserialize, Serialize};

use crate::listing::Record;

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// User-selected filter, sort, and page parameters.
///
/// Invariant: after any recomputation, `page` lies in
/// `[1, max(1, page_count)]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Query {
    /// Exact-match city filter; empty means no filter.
    #[serde(default)]
    pub selected_city: String,

    /// Substring category filter; empty means no filter.
    #[serde(default)]
    pub category_text: String,

    /// Field key to sort by; `None` preserves input order.
    pub sort_field: Option<String>,

    /// Sort direction.
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Current page, 1-indexed.
    pub page: u32,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            selected_city: String::new(),
            category_text: String::new(),
            sort_field: None,
            sort_order: SortOrder::Asc,
            page: 1,
        }
    }
}

/// The visible page and its counts for a given records + query pair.
///
/// Fully determined by the record set and the query, with no hidden state.
/// `total` is reported even when `page_records` is empty so the presentation
/// layer can distinguish "no records found" from "page out of range".
#[derive(Debug, Clone, Serialize)]
pub struct ReportPage {
    /// Records on the visible page, at most `PAGE_SIZE`.
    pub page_records: Vec<Record>,

    /// Page that was sliced (1-indexed).
    pub page: u32,

    /// Total number of pages, at least 1.
    pub page_count: u32,

    /// Number of records after filtering, before paging.
    pub total: usize,

    /// Whether there is a previous page.
    pub has_prev: bool,

    /// Whether there is a next page.
    pub has_next: bool,
}
