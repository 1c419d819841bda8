//! Infection statistics for one run.

/// Collects the per-run infection statistics: a periodic sample series for
/// the average and an incrementally tracked maximum.
///
/// The maximum is updated on *every* infected-count change, not just at
/// sample instants — a spike that rises and falls between two samples still
/// registers.
#[derive(Default)]
pub struct StatsCollector {
    samples: Vec<u32>,
    max: u32,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a periodic sample of the instantaneous infected count.
    pub fn record_sample(&mut self, infected: u32) {
        self.samples.push(infected);
    }

    /// Notify the collector that the infected count changed.
    pub fn observe(&mut self, infected: u32) {
        self.max = self.max.max(infected);
    }

    /// Mean of all recorded samples, or `0.0` if none were taken (a run
    /// shorter than one sample interval).
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.samples.iter().map(|&s| s as u64).sum();
        sum as f64 / self.samples.len() as f64
    }

    /// Highest infected count observed at any instant.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Number of samples taken so far.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}
