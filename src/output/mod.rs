//! Output handling for emitted job records
//!
//! The coordinator's emit call is fire-and-forget: records flow into a
//! [`RecordSink`] and the crawl never waits on downstream acknowledgment.
//! [`JsonlSink`] writes one JSON object per line; [`MemorySink`] collects
//! records in memory for tests and embedding.

mod jsonl;
mod memory;
mod traits;

pub use jsonl::JsonlSink;
pub use memory::MemorySink;
pub use traits::{RecordSink, SinkError, SinkResult};
