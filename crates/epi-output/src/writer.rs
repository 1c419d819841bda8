//! The `RecordWriter` trait implemented by result writers.

use epi_batch::AnalyticsRecord;

use crate::OutputResult;

/// Sink for the per-run records of a completed batch.
pub trait RecordWriter {
    /// Append a batch of records.
    fn write_records(&mut self, records: &[AnalyticsRecord]) -> OutputResult<()>;

    /// Flush and close the underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
