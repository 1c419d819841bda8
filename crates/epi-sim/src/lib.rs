//! `epi-sim` — the discrete-event simulation run for the `grid_epi` engine.
//!
//! # Event loop
//!
//! Everything that happens during a run is an [`Event`] in a virtual-time
//! queue, processed strictly in timestamp order (FIFO within a timestamp):
//!
//! ```text
//! while next event fires before `duration`:
//!   DwellEnd(a)     → agent finished waiting; pick a destination and depart
//!   Arrival(a)      → agent reached its tile; migrate grid counters or
//!                     evaluate infection; schedule the next DwellEnd
//!   Recovery(a)     → infected agent heals; maybe enter TemporaryImmune
//!   ImmunityEnd(a)  → temporary immunity wears off
//!   Sample          → record the instantaneous infected count (every 500)
//!   IdleSweep       → infection re-check for stationary agents (every 500)
//! ```
//!
//! Stopping a run is dropping the queue: once the loop refuses events at or
//! past the end instant, no timer can ever fire again, so the final report
//! is computed from a frozen world.  There are no real-time timers anywhere.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_mobility::{GridMover, UniformDestinations};
//! use epi_sim::{NoopObserver, RunBuilder};
//!
//! let provider = UniformDestinations::new(config.width, config.height);
//! let mut run = RunBuilder::new(config, provider, GridMover).build()?;
//! let report = run.run(&mut NoopObserver)?;
//! println!("avg {} max {}", report.average, report.max);
//! ```

pub mod builder;
pub mod dwell;
pub mod error;
pub mod event;
pub mod health;
pub mod observer;
pub mod run;
pub mod stats;


pub use builder::RunBuilder;
pub use error::{SimError, SimResult};
pub use event::{Event, EventQueue};
pub use observer::{NoopObserver, RunObserver};
pub use run::{RunPhase, RunReport, SimulationRun, IDLE_CHECK_INTERVAL, SAMPLE_INTERVAL};
pub use stats::StatsCollector;
