//! Record sources: one-shot collaborators that load the listing data.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::Record;
use crate::error::LoadResult;

/// A one-shot source of listing records.
///
/// `load` is called at most once and never retried. If it fails, the report
/// simply stays in its not-ready state; the source's error is the caller's
/// channel for surfacing the failure.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn load(&self) -> LoadResult<Vec<Record>>;
}

/// Reads a JSON array of record objects from disk.
///
/// An optional delay simulates upstream load latency before the file is
/// touched.
pub struct JsonFileSource {
    path: PathBuf,
    delay: Duration,
}

impl JsonFileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delay: Duration::ZERO,
        }
    }

    /// Set a simulated load latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn load(&self) -> LoadResult<Vec<Record>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let bytes = tokio::fs::read(&self.path).await?;
        let records: Vec<Record> = serde_json::from_slice(&bytes)?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            "records file read"
        );

        Ok(records)
    }
}
