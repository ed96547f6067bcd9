//! Record emitter
//!
//! The last hop of the detail phase: merge the carried stub with the
//! extracted fields and forward the record to the sink, suppressing
//! duplicate URLs. The merge itself lives on [`JobRecord::merge`] and is a
//! pure union of the two halves.

use crate::output::{RecordSink, SinkResult};
use crate::record::{DetailFields, JobRecord, ListingStub};
use std::collections::HashSet;

/// Merges stubs with detail fields and forwards records to a sink
///
/// At most one record is emitted per URL; the first emit wins.
pub struct Emitter<S: RecordSink> {
    sink: S,
    emitted: HashSet<String>,
}

impl<S: RecordSink> Emitter<S> {
    /// Wraps a sink
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            emitted: HashSet::new(),
        }
    }

    /// Merges and forwards one record
    ///
    /// Returns `Ok(true)` when the record was written, `Ok(false)` when it
    /// was suppressed as a duplicate of an earlier URL.
    pub fn emit(&mut self, stub: ListingStub, fields: DetailFields) -> SinkResult<bool> {
        let record = JobRecord::merge(stub, fields);

        if !self.emitted.insert(record.url.clone()) {
            tracing::debug!("Suppressing duplicate record for {}", record.url);
            return Ok(false);
        }

        self.sink.write(&record)?;
        Ok(true)
    }

    /// Finalizes the underlying sink
    pub fn finalize(&mut self) -> SinkResult<()> {
        self.sink.finalize()
    }
}
