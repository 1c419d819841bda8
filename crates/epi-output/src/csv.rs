//! CSV output backend.
//!
//! Creates one file in the configured output directory:
//! - `run_records.csv` — one row per run, parameters and results side by side.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use epi_batch::AnalyticsRecord;

use crate::writer::RecordWriter;
use crate::OutputResult;

/// Writes batch results to a CSV file.
pub struct CsvWriter {
    records: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `run_records.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut records = Writer::from_path(dir.join("run_records.csv"))?;
        records.write_record([
            "probabilityOfInfection",
            "probabilityOfInfectionAtTheBeginning",
            "recoveryTime",
            "recoveryTimeDispersion",
            "immunityTime",
            "immunityTimeDispersion",
            "immunityRate",
            "timeSpendingInPublic",
            "timeSpendingInPublicDispersion",
            "timeSpendingInHome",
            "timeSpendingInHomeDispersion",
            "timeSpendingInHomeWhenIll",
            "infectionRadius",
            "averageInfected",
            "maxInfected",
        ])?;

        Ok(Self { records, finished: false })
    }
}

impl RecordWriter for CsvWriter {
    fn write_records(&mut self, records: &[AnalyticsRecord]) -> OutputResult<()> {
        for record in records {
            let p = &record.params;
            self.records.write_record(&[
                p.probability_of_infection.to_string(),
                p.probability_of_infection_at_the_beginning.to_string(),
                p.recovery_time.to_string(),
                p.recovery_time_dispersion.to_string(),
                p.immunity_time.to_string(),
                p.immunity_time_dispersion.to_string(),
                p.immunity_rate.to_string(),
                p.time_spending_in_public.to_string(),
                p.time_spending_in_public_dispersion.to_string(),
                p.time_spending_in_home.to_string(),
                p.time_spending_in_home_dispersion.to_string(),
                p.time_spending_in_home_when_ill.to_string(),
                p.infection_radius.to_string(),
                record.average_infected.to_string(),
                record.max_infected.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.records.flush()?;
        Ok(())
    }
}
