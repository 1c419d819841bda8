//! sweep — smallest example for the grid_epi epidemic engine.
//!
//! Runs a three-point sweep over the per-exposure infection probability on a
//! 40×40 grid with 100 agents, then writes the per-run records to CSV and
//! prints the analysis payload.  Scale comment: bump `numberOfPlayers` and
//! `timeOfSimulation` for a serious experiment; the engine is O(events), not
//! O(wall-clock).

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use epi_batch::{analysis_payload, BatchConfig, BatchRunner};
use epi_output::{CsvWriter, RecordWriter};
use epi_sim::RunObserver;

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_WIDTH: u16 = 40;
const GRID_HEIGHT: u16 = 40;
const SEED: u64 = 42;

// ── Batch document ────────────────────────────────────────────────────────────

// Same parameter set three times, with the infection probability swept
// 0.001 → 0.002 → 0.004.  30 virtual minutes per run.
const SWEEP_JSON: &str = r#"{
    "numberOfSimulations": 3,
    "numberOfPlayers": 100,
    "timeOfSimulation": 1800000,
    "walkingSpeed": 10.0,
    "simulations": [
        {
            "probabilityOfInfection": 0.001,
            "probabilityOfInfectionAtTheBeginning": 0.05,
            "recoveryTime": 25000, "recoveryTimeDispersion": 5000,
            "immunityTime": 60000, "immunityTimeDispersion": 10000,
            "immunityRate": 0.8,
            "timeSpendingInPublic": 5500, "timeSpendingInPublicDispersion": 2500,
            "timeSpendingInHome": 5500, "timeSpendingInHomeDispersion": 2500,
            "timeSpendingInHomeWhenIll": 10000,
            "infectionRadius": 1
        },
        {
            "probabilityOfInfection": 0.002,
            "probabilityOfInfectionAtTheBeginning": 0.05,
            "recoveryTime": 25000, "recoveryTimeDispersion": 5000,
            "immunityTime": 60000, "immunityTimeDispersion": 10000,
            "immunityRate": 0.8,
            "timeSpendingInPublic": 5500, "timeSpendingInPublicDispersion": 2500,
            "timeSpendingInHome": 5500, "timeSpendingInHomeDispersion": 2500,
            "timeSpendingInHomeWhenIll": 10000,
            "infectionRadius": 1
        },
        {
            "probabilityOfInfection": 0.004,
            "probabilityOfInfectionAtTheBeginning": 0.05,
            "recoveryTime": 25000, "recoveryTimeDispersion": 5000,
            "immunityTime": 60000, "immunityTimeDispersion": 10000,
            "immunityRate": 0.8,
            "timeSpendingInPublic": 5500, "timeSpendingInPublicDispersion": 2500,
            "timeSpendingInHome": 5500, "timeSpendingInHomeDispersion": 2500,
            "timeSpendingInHomeWhenIll": 10000,
            "infectionRadius": 1
        }
    ]
}"#;

// ── Progress observer ─────────────────────────────────────────────────────────

#[derive(Default)]
struct ProgressObserver {
    completed: usize,
    peak: u32,
}

impl RunObserver for ProgressObserver {
    fn on_infected_changed(&mut self, infected: u32) {
        self.peak = self.peak.max(infected);
    }

    fn on_run_complete(&mut self, average: f64, max: u32) {
        self.completed += 1;
        println!("  run {} done: average {average:.2}, peak {max}", self.completed);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== sweep — grid_epi epidemic engine ===");
    println!("Grid: {GRID_WIDTH}x{GRID_HEIGHT}  |  Seed: {SEED}");
    println!();

    // 1. Parse the embedded batch document.
    let config = BatchConfig::from_json_str(SWEEP_JSON)?;
    println!(
        "Batch: {} runs, {} agents each, {} virtual ms per run",
        config.number_of_simulations, config.number_of_players, config.time_of_simulation
    );

    // 2. Run the sweep.
    let runner = BatchRunner::new(config, GRID_WIDTH, GRID_HEIGHT, SEED)?;
    let mut progress = ProgressObserver::default();
    let t0 = Instant::now();
    let records = runner.run_with(&mut progress)?;
    let elapsed = t0.elapsed();
    println!("Batch complete in {:.3} s (peak across all runs: {})", elapsed.as_secs_f64(), progress.peak);
    println!();

    // 3. Write the CSV.
    std::fs::create_dir_all("output/sweep")?;
    let mut writer = CsvWriter::new(Path::new("output/sweep"))?;
    writer.write_records(&records)?;
    writer.finish()?;
    println!("Wrote output/sweep/run_records.csv ({} rows)", records.len());
    println!();

    // 4. Results table.
    println!("{:<12} {:<12} {:<8}", "p(infect)", "avgInfected", "peak");
    println!("{}", "-".repeat(34));
    for record in &records {
        println!(
            "{:<12} {:<12.2} {:<8}",
            record.params.probability_of_infection, record.average_infected, record.max_infected
        );
    }
    println!();

    // 5. Analysis payload, as it would be posted to the correlation service.
    println!("{}", serde_json::to_string_pretty(&analysis_payload(&records))?);

    Ok(())
}
