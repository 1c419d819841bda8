//! `epi-output` — batch-result export for the `grid_epi` engine.
//!
//! Writes the per-run [`AnalyticsRecord`]s of a completed sweep to disk for
//! offline analysis.  CSV is the only backend; the column names match the
//! JSON field names so a row joins cleanly against the analysis payload.
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, RecordWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_records(&records)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use writer::RecordWriter;
