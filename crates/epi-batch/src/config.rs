//! Batch configuration document.
//!
//! The JSON schema is camelCase end to end because the records produced from
//! these parameters flow into an external analytics service that expects the
//! same field names back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use epi_core::RunConfig;

use crate::error::{BatchError, BatchResult};

/// One parameter sweep: batch-wide settings plus per-run parameter sets.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    /// Declared run count.  Must equal `simulations.len()` — a mismatch means
    /// the document was edited inconsistently and the whole batch is refused.
    pub number_of_simulations: u32,

    /// Agent population, shared by every run in the batch.
    pub number_of_players: u32,

    /// Virtual duration of each run, in milliseconds.
    pub time_of_simulation: u64,

    /// Movement speed in tiles per virtual second, shared by every run.
    pub walking_speed: f64,

    /// Per-run parameter sets, executed in this order.
    pub simulations: Vec<RunParams>,
}

/// The parameters that vary between runs of a sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunParams {
    pub probability_of_infection: f64,
    pub probability_of_infection_at_the_beginning: f64,
    pub recovery_time: u64,
    pub recovery_time_dispersion: u64,
    pub immunity_time: u64,
    pub immunity_time_dispersion: u64,
    pub immunity_rate: f64,
    pub time_spending_in_public: u64,
    pub time_spending_in_public_dispersion: u64,
    pub time_spending_in_home: u64,
    pub time_spending_in_home_dispersion: u64,
    pub time_spending_in_home_when_ill: u64,
    pub infection_radius: u16,
}

impl BatchConfig {
    /// Parse a batch document from a JSON string.
    pub fn from_json_str(json: &str) -> BatchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a batch document from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> BatchResult<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Structural checks that apply to the batch as a whole.  Per-run value
    /// ranges are checked by [`RunConfig::validate`] once the run configs are
    /// assembled.
    pub fn validate(&self) -> BatchResult<()> {
        if self.simulations.is_empty() {
            return Err(BatchError::EmptyBatch);
        }
        if self.number_of_simulations as usize != self.simulations.len() {
            return Err(BatchError::CountMismatch {
                declared: self.number_of_simulations,
                got: self.simulations.len(),
            });
        }
        if self.number_of_players == 0 {
            return Err(BatchError::ZeroPopulation);
        }
        Ok(())
    }

    /// Assemble the full per-run config for `simulations[index]`.
    pub fn run_config(&self, index: usize, width: u16, height: u16, seed: u64) -> RunConfig {
        let params = &self.simulations[index];
        RunConfig {
            population: self.number_of_players,
            duration: self.time_of_simulation,
            width,
            height,
            base_infection_probability: params.probability_of_infection,
            initial_infection_probability: params.probability_of_infection_at_the_beginning,
            recovery_time: params.recovery_time,
            recovery_dispersion: params.recovery_time_dispersion,
            immunity_time: params.immunity_time,
            immunity_dispersion: params.immunity_time_dispersion,
            immunity_rate: params.immunity_rate,
            public_dwell: params.time_spending_in_public,
            public_dwell_dispersion: params.time_spending_in_public_dispersion,
            private_dwell: params.time_spending_in_home,
            private_dwell_dispersion: params.time_spending_in_home_dispersion,
            home_sick_rest: params.time_spending_in_home_when_ill,
            infection_radius: params.infection_radius,
            walking_speed: self.walking_speed,
            seed,
        }
    }
}
