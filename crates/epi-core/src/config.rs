//! Per-run simulation configuration and pre-run validation.

use crate::error::{EpiError, EpiResult};

/// Everything one simulation run needs to know.
///
/// All durations are in virtual milliseconds ([`Tick`][crate::Tick] units).
/// Each `*_dispersion` field is the half-width of a uniform draw around its
/// mean: an actual duration is drawn from `[mean − dispersion, mean + dispersion]`.
///
/// A `RunConfig` is validated once by [`RunConfig::validate`] before the run
/// starts; the engine itself assumes a valid config and never re-checks.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Number of agents in the run.  Must be non-zero.
    pub population: u32,

    /// Total virtual duration of the run.  Events at or after this instant
    /// never execute.
    pub duration: u64,

    /// Grid dimensions.  Must be at least 3×3 — the occupancy window excludes
    /// the border ring, so anything smaller has no interior at all.
    pub width: u16,
    pub height: u16,

    /// Per-exposure infection probability multiplier.  The actual chance of
    /// infection is `pressure × base_infection_probability` (times the
    /// immunity discount, when applicable).
    pub base_infection_probability: f64,

    /// Probability that an agent is seeded `Infected` at bootstrap.
    pub initial_infection_probability: f64,

    /// Mean time an agent stays infected, and its dispersion.
    pub recovery_time: u64,
    pub recovery_dispersion: u64,

    /// Mean duration of post-recovery immunity, and its dispersion.
    /// Zero means recovered agents return straight to `Susceptible`.
    pub immunity_time: u64,
    pub immunity_dispersion: u64,

    /// How strongly temporary immunity suppresses reinfection: the infection
    /// probability is multiplied by `1 − immunity_rate` while immune.
    pub immunity_rate: f64,

    /// Mean dwell at a public tile, and its dispersion.
    pub public_dwell: u64,
    pub public_dwell_dispersion: u64,

    /// Mean dwell at the home tile, and its dispersion.
    pub private_dwell: u64,
    pub private_dwell_dispersion: u64,

    /// Extra home-dwell time for infected agents.  Zero disables the
    /// stay-home-when-ill behavior entirely (sick agents roam like everyone
    /// else).
    pub home_sick_rest: u64,

    /// Half-width of the square neighborhood summed for infection pressure.
    pub infection_radius: u16,

    /// Movement speed in tiles per virtual second.  Consumed by the mover's
    /// travel-time computation, not by the infection logic.
    pub walking_speed: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl RunConfig {
    /// Reject invalid configurations before a run starts.
    ///
    /// This is caller-surfaced validation: every failure here is a
    /// configuration mistake, never a run-time fault.
    pub fn validate(&self) -> EpiResult<()> {
        if self.population == 0 {
            return Err(EpiError::Config("population must be non-zero".into()));
        }
        if self.duration == 0 {
            return Err(EpiError::Config("run duration must be non-zero".into()));
        }
        if self.width < 3 || self.height < 3 {
            return Err(EpiError::Config(format!(
                "grid {}x{} is too small: the occupancy window needs an interior, so both \
                 dimensions must be at least 3",
                self.width, self.height
            )));
        }
        for (name, p) in [
            ("base_infection_probability", self.base_infection_probability),
            ("initial_infection_probability", self.initial_infection_probability),
            ("immunity_rate", self.immunity_rate),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(EpiError::Config(format!("{name} must be in [0, 1], got {p}")));
            }
        }
        for (name, mean, dispersion) in [
            ("recovery", self.recovery_time, self.recovery_dispersion),
            ("immunity", self.immunity_time, self.immunity_dispersion),
            ("public dwell", self.public_dwell, self.public_dwell_dispersion),
            ("private dwell", self.private_dwell, self.private_dwell_dispersion),
        ] {
            if dispersion > mean {
                return Err(EpiError::Config(format!(
                    "{name} dispersion {dispersion} exceeds its mean {mean}"
                )));
            }
        }
        if !(self.walking_speed > 0.0) {
            return Err(EpiError::Config(format!(
                "walking_speed must be positive, got {}",
                self.walking_speed
            )));
        }
        Ok(())
    }
}
