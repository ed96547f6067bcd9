//! Record sink trait and types

use crate::record::JobRecord;
use thiserror::Error;

/// Errors that can occur while writing records
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Consumes the stream of emitted job records
///
/// The crawl core makes no ordering promises across records; sinks must not
/// rely on any. `finalize` is called once after the frontier drains.
pub trait RecordSink: Send {
    /// Writes one record
    fn write(&mut self, record: &JobRecord) -> SinkResult<()>;

    /// Flushes any buffered output; called once at the end of the crawl
    fn finalize(&mut self) -> SinkResult<()> {
        Ok(())
    }
}
