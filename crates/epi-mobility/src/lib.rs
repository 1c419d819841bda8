//! `epi-mobility` — movement collaborators for the `grid_epi` engine.
//!
//! The simulation core does not implement pathfinding.  It delegates two
//! questions to pluggable collaborators:
//!
//! - **"How long does this trip take?"** — the [`Mover`] trait.  The default
//!   [`GridMover`] walks the Chebyshev distance at the configured speed; a
//!   real path-following mover can replace it without touching the engine.
//! - **"Where should I go?"** — the [`DestinationProvider`] trait.  The
//!   default [`UniformDestinations`] picks any tile on the map uniformly;
//!   a map-aware provider would return only walkable tiles.
//!
//! [`MobilityEngine`] ties the two timing sides together: it owns per-agent
//! [`MovementState`] and converts `begin_travel` requests into arrival
//! instants that the run loop schedules as events.  The engine uses a
//! **teleport-at-arrival** model: an agent logically stays at its departure
//! tile until the arrival instant, then appears at the destination.

pub mod engine;
pub mod error;
pub mod mover;
pub mod provider;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use mover::{GridMover, Mover};
pub use provider::{DestinationProvider, UniformDestinations};
pub use state::MovementState;
