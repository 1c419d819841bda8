//! Deterministic per-agent and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = run_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state, so the order in which events touch agents
//!   within a tick cannot perturb any other agent's draws.
//! - Two runs with the same seed and configuration produce identical
//!   infection histories and identical `(average, max)` reports.
//! - Changing the population size does not disturb the seeds of existing
//!   agents — sweeps stay comparable as the population grows.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Create one per agent at run bootstrap; store in a parallel `Vec<AgentRng>`
/// alongside the other SoA arrays.  Every probabilistic decision an agent
/// makes — infection rolls, dwell-duration draws, the home-or-public coin
/// flip — comes from its own stream.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's seed and an agent ID.
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        let seed = run_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Draw a duration uniformly from `[mean − dispersion, mean + dispersion]`.
    ///
    /// Config validation guarantees `dispersion <= mean`, so the lower bound
    /// never underflows.  A zero dispersion returns `mean` exactly without
    /// consuming randomness, keeping zero-dispersion timings bit-exact.
    #[inline]
    pub fn spread(&mut self, mean: u64, dispersion: u64) -> u64 {
        if dispersion == 0 {
            mean
        } else {
            self.0.gen_range(mean - dispersion..=mean + dispersion)
        }
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for global operations (home-tile placement, per-run seed
/// derivation in a batch, etc.).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — used by the
    /// batch runner to give each run an independent deterministic stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
