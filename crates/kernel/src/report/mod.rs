//! Report query pipeline.
//!
//! The derived view is a pure function of the record set and the current
//! query, recomputed from scratch on every query change:
//! filter, then stable sort, then fixed-size pagination.
//!
//! This module provides:
//! - normalize: canonical string form for all comparisons
//! - distinct_cities: the city selector index
//! - filter / sort / paginate: the pipeline stages
//! - ReportController: query state machine driving recomputation

mod cities;
mod controller;
mod filter;
mod normalize;
mod pager;
mod sort;
mod types;

pub use cities::distinct_cities;
pub use controller::ReportController;
pub use filter::filter;
pub use normalize::{normalize, normalize_value};
pub use pager::{PAGE_SIZE, paginate};
pub use sort::sort;
pub use types::{Query, ReportPage, SortOrder};
