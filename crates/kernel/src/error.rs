//! Record-source error types.
//!
//! The query core itself never raises a user-visible error: missing or
//! malformed fields degrade to empty strings, and out-of-range page requests
//! are rejected silently. Errors only exist on the loading collaborator side.

use thiserror::Error;

/// Errors surfaced by record sources.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read records file")]
    Io(#[from] std::io::Error),

    #[error("records file is not a JSON array of objects")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using LoadError.
pub type LoadResult<T> = Result<T, LoadError>;
