//! Integration tests for epi-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use epi_batch::{AnalyticsRecord, RunParams};

    use crate::csv::CsvWriter;
    use crate::writer::RecordWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn record(recovery_time: u64, max_infected: u32) -> AnalyticsRecord {
        AnalyticsRecord {
            params: RunParams {
                probability_of_infection: 0.25,
                probability_of_infection_at_the_beginning: 0.1,
                recovery_time,
                recovery_time_dispersion: 5_000,
                immunity_time: 10_000,
                immunity_time_dispersion: 2_000,
                immunity_rate: 0.8,
                time_spending_in_public: 5_500,
                time_spending_in_public_dispersion: 2_500,
                time_spending_in_home: 5_500,
                time_spending_in_home_dispersion: 2_500,
                time_spending_in_home_when_ill: 10_000,
                infection_radius: 1,
            },
            average_infected: max_infected as f64 / 2.0,
            max_infected,
        }
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("run_records.csv").exists());
    }

    #[test]
    fn csv_header_matches_json_field_names() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("run_records.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers[0], "probabilityOfInfection");
        assert_eq!(headers[12], "infectionRadius");
        assert_eq!(headers[13], "averageInfected");
        assert_eq!(headers[14], "maxInfected");
        assert_eq!(headers.len(), 15);
    }

    #[test]
    fn csv_rows_preserve_record_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_records(&[record(11_000, 2), record(12_000, 5), record(13_000, 9)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("run_records.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][2], "11000"); // recoveryTime
        assert_eq!(&rows[1][2], "12000");
        assert_eq!(&rows[2][2], "13000");
        assert_eq!(&rows[1][14], "5"); // maxInfected
        assert_eq!(&rows[1][13], "2.5"); // averageInfected
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_records(&[record(11_000, 1)]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("run_records.csv")).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }
}
