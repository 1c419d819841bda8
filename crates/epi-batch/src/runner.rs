//! Sequential batch execution.

use tracing::info;

use epi_core::{RunId, SimRng};
use epi_mobility::{GridMover, UniformDestinations};
use epi_sim::{NoopObserver, RunBuilder, RunObserver};

use crate::config::BatchConfig;
use crate::error::BatchResult;
use crate::record::AnalyticsRecord;

/// Executes every run of a [`BatchConfig`] strictly one after another.
///
/// Runs never overlap: run *k+1* is built only after run *k* has produced its
/// report.  Each run gets an independent seed derived from the batch seed, so
/// the whole sweep is reproducible from `(config, width, height, seed)`.
pub struct BatchRunner {
    config: BatchConfig,
    width: u16,
    height: u16,
    seed: u64,
}

impl BatchRunner {
    /// Validate the batch structure and per-run configs up front.  Every
    /// rejection happens here, before any run starts — a `BatchRunner` that
    /// constructs successfully will not fail on configuration.
    pub fn new(config: BatchConfig, width: u16, height: u16, seed: u64) -> BatchResult<Self> {
        config.validate()?;
        for index in 0..config.simulations.len() {
            // Seed 0 is a placeholder; it plays no part in validation.
            config.run_config(index, width, height, 0).validate()?;
        }
        Ok(Self { config, width, height, seed })
    }

    /// Run the batch, reporting nothing along the way.
    pub fn run(&self) -> BatchResult<Vec<AnalyticsRecord>> {
        self.run_with(&mut NoopObserver)
    }

    /// Run the batch, forwarding every run's callbacks to `observer`.  The
    /// observer sees `on_run_complete` exactly once per run, in input order.
    pub fn run_with<O: RunObserver>(&self, observer: &mut O) -> BatchResult<Vec<AnalyticsRecord>> {
        let total = self.config.simulations.len();
        info!(runs = total, population = self.config.number_of_players, "starting batch");

        let mut master = SimRng::new(self.seed);
        let mut records = Vec::with_capacity(total);
        for (index, params) in self.config.simulations.iter().enumerate() {
            let run_seed: u64 = master.child(index as u64).random();
            let config = self.config.run_config(index, self.width, self.height, run_seed);

            let provider = UniformDestinations::new(self.width, self.height);
            let mut run = RunBuilder::new(config, provider, GridMover).build()?;
            let report = run.run(observer)?;

            info!(
                run = %RunId(index as u32),
                average = report.average,
                max = report.max,
                "run complete"
            );
            records.push(AnalyticsRecord {
                params: params.clone(),
                average_infected: report.average,
                max_infected: report.max,
            });
        }

        info!(records = records.len(), "batch complete");
        Ok(records)
    }
}
