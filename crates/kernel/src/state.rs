//! Report load lifecycle.
//!
//! Records arrive from a single one-shot load. Until it completes, the
//! report has no defined output: readers get `None` and must present a
//! neutral/empty state. Staying in `Loading` forever — because the source
//! failed or never resolves — is a valid terminal condition, not an error.

use tracing::{info, warn};

use crate::listing::Record;
use crate::report::ReportController;

/// Report lifecycle state.
#[derive(Default)]
pub enum ReportState {
    /// The record load has not completed.
    #[default]
    Loading,

    /// Records are in and the report is queryable.
    Ready(ReportController),
}

impl ReportState {
    /// Create a state awaiting its record load.
    pub fn new() -> Self {
        Self::Loading
    }

    /// Populate the record set. Only the first ingest takes effect; the
    /// load is one-shot and is never repeated.
    pub fn ingest(&mut self, records: Vec<Record>) {
        match self {
            Self::Loading => {
                info!(records = records.len(), "records loaded");
                *self = Self::Ready(ReportController::new(records));
            }
            Self::Ready(_) => {
                warn!("records already loaded, ignoring repeat ingest");
            }
        }
    }

    /// Whether the load has completed.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The controller, once ready.
    pub fn controller(&self) -> Option<&ReportController> {
        match self {
            Self::Loading => None,
            Self::Ready(controller) => Some(controller),
        }
    }

    /// Mutable controller access for issuing query transitions.
    pub fn controller_mut(&mut self) -> Option<&mut ReportController> {
        match self {
            Self::Loading => None,
            Self::Ready(controller) => Some(controller),
        }
    }
}
