//! JSON Lines record sink

use crate::output::{RecordSink, SinkResult};
use crate::record::JobRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes records to a file, one JSON object per line
///
/// Field names in the output follow the feed schema on [`JobRecord`]
/// (`URL`, `Title`, `Address`, ...). Output is buffered; `finalize` flushes.
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    /// Creates (or truncates) the output file at `path`
    pub fn create(path: &Path) -> SinkResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl RecordSink for JsonlSink {
    fn write(&mut self, record: &JobRecord) -> SinkResult<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finalize(&mut self) -> SinkResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
