//! Fluent builder for constructing a [`SimulationRun`].

use epi_agent::AgentStoreBuilder;
use epi_core::{AgentId, RunConfig, SimRng, Tick, Tile};
use epi_grid::OccupancyGrid;
use epi_mobility::{DestinationProvider, MobilityEngine, Mover};

use crate::run::{RunPhase, IDLE_CHECK_INTERVAL, SAMPLE_INTERVAL};
use crate::{Event, EventQueue, NoopObserver, SimError, SimResult, SimulationRun, StatsCollector};

/// Bounds of the independent per-agent start-up delay before the first dwell
/// expires.  Spreading the first departures avoids a thundering herd of
/// simultaneous destination requests at tick zero.
const STARTUP_DELAY_MIN: u64 = 500;
const STARTUP_DELAY_MAX: u64 = 10_500;

/// Fluent builder for [`SimulationRun<M, P>`].
///
/// # Required inputs
///
/// - [`RunConfig`] — population, duration, probabilities, …
/// - `P: DestinationProvider` — where agents go when they leave home
/// - `M: Mover` — how long trips take
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                                        |
/// |-------------|------------------------------------------------|
/// | `.homes(v)` | Uniform random tiles drawn from the run seed   |
///
/// # Example
///
/// ```rust,ignore
/// let provider = UniformDestinations::new(config.width, config.height);
/// let mut run = RunBuilder::new(config, provider, GridMover).build()?;
/// let report = run.run(&mut NoopObserver)?;
/// ```
pub struct RunBuilder<M: Mover, P: DestinationProvider> {
    config: RunConfig,
    provider: P,
    mover: M,
    homes: Option<Vec<Tile>>,
}

impl<M: Mover, P: DestinationProvider> RunBuilder<M, P> {
    /// Create a builder with all required inputs.
    pub fn new(config: RunConfig, provider: P, mover: M) -> Self {
        Self {
            config,
            provider,
            mover,
            homes: None,
        }
    }

    /// Supply each agent's home tile (must be length `population`).
    ///
    /// If not called, homes are scattered uniformly over the grid using the
    /// run seed, so the default placement is as deterministic as everything
    /// else.
    pub fn homes(mut self, homes: Vec<Tile>) -> Self {
        self.homes = Some(homes);
        self
    }

    /// Validate the config, bootstrap the world, seed initial infections,
    /// and queue the start-up events.  The returned run is in the `Created`
    /// phase, ready for a single [`run`][SimulationRun::run] call.
    pub fn build(self) -> SimResult<SimulationRun<M, P>> {
        self.config.validate()?;
        let population = self.config.population as usize;

        // ── Resolve home tiles ────────────────────────────────────────────
        let homes = match self.homes {
            Some(h) => {
                if h.len() != population {
                    return Err(SimError::AgentCountMismatch {
                        expected: population,
                        got: h.len(),
                        what: "home tiles",
                    });
                }
                h
            }
            None => {
                let mut rng = SimRng::new(self.config.seed);
                (0..population)
                    .map(|_| {
                        Tile::new(
                            rng.gen_range(0..self.config.width),
                            rng.gen_range(0..self.config.height),
                        )
                    })
                    .collect()
            }
        };

        // ── Assemble the world ────────────────────────────────────────────
        let (agents, rngs) = AgentStoreBuilder::new(population, self.config.seed)
            .homes(homes)
            .build();

        let mut mobility = MobilityEngine::new(self.mover, population);
        for agent in agents.agent_ids() {
            mobility.place(agent, agents.home_tile[agent.index()], Tick::ZERO);
        }

        let mut run = SimulationRun {
            grid: OccupancyGrid::new(self.config.width, self.config.height),
            agents,
            rngs,
            queue: EventQueue::new(),
            mobility,
            provider: self.provider,
            stats: StatsCollector::new(),
            infected: 0,
            now: Tick::ZERO,
            phase: RunPhase::Created,
            config: self.config,
        };

        // ── Seed initial infections (ascending AgentId for determinism) ───
        //
        // Seeding runs the same become-infected bookkeeping as a live
        // infection, so recovery timers for patient zero are already queued.
        // The builder has no observer yet; `run` surfaces the seeded count
        // before processing the first event.
        for agent in 0..run.agents.count as u32 {
            let agent = AgentId(agent);
            let seeded = run
                .rngs
                .get_mut(agent)
                .gen_bool(run.config.initial_infection_probability);
            if seeded {
                run.infect(agent, Tick::ZERO, &mut NoopObserver)?;
            }
        }
        tracing::debug!(
            population = run.agents.count,
            seeded = run.infected,
            "bootstrap complete"
        );

        // ── Queue start-up events ─────────────────────────────────────────
        for agent in run.agents.agent_ids() {
            let delay = run
                .rngs
                .get_mut(agent)
                .gen_range(STARTUP_DELAY_MIN..STARTUP_DELAY_MAX);
            run.queue.push(Tick(delay), Event::DwellEnd(agent));
        }
        run.queue.push(Tick(SAMPLE_INTERVAL), Event::Sample);
        run.queue.push(Tick(IDLE_CHECK_INTERVAL), Event::IdleSweep);

        Ok(run)
    }
}
