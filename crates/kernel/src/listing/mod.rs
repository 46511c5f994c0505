//! Listing records and their sources.
//!
//! This module provides:
//! - Record: one business-listing entry, a read-only JSON object
//! - RecordSource: one-shot loading collaborator trait
//! - JsonFileSource: reads a JSON array of records from disk
//! - Column metadata for the tabular presentation layer

mod columns;
mod record;
mod source;

pub use columns::{DEFAULT_COLUMNS, ReportColumn};
pub use record::{Record, value_to_text};
pub use source::{JsonFileSource, RecordSource};
