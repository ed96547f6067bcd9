//! In-memory record sink

use crate::output::{RecordSink, SinkResult};
use crate::record::JobRecord;
use std::sync::{Arc, Mutex};

/// Collects records in memory
///
/// Cloning the sink shares the underlying collection, so a test can hand
/// one clone to the coordinator and keep another to assert on afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<JobRecord>>>,
}

impl MemorySink {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything written so far
    pub fn records(&self) -> Vec<JobRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Number of records written so far
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Returns true when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSink for MemorySink {
    fn write(&mut self, record: &JobRecord) -> SinkResult<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
