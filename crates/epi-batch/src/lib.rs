//! `epi-batch` — parameter-sweep execution for the `grid_epi` engine.
//!
//! A batch is described by one JSON document (camelCase keys, matching the
//! analytics pipeline the records feed into): batch-wide settings plus one
//! parameter set per run.  [`BatchRunner`] executes the runs strictly one
//! after another and collects one [`AnalyticsRecord`] per run, in input
//! order.
//!
//! ```rust,ignore
//! use epi_batch::{BatchConfig, BatchRunner};
//!
//! let config = BatchConfig::from_path("sweep.json")?;
//! let runner = BatchRunner::new(config, 40, 40, 7)?;
//! let records = runner.run()?;
//! let payload = epi_batch::analysis_payload(&records);
//! ```

pub mod config;
pub mod error;
pub mod record;
pub mod runner;


pub use config::{BatchConfig, RunParams};
pub use error::{BatchError, BatchResult};
pub use record::{analysis_payload, AnalyticsRecord};
pub use runner::BatchRunner;
