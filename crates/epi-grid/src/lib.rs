//! `epi-grid` — the occupancy grid behind infection pressure.
//!
//! The grid maintains one non-negative counter per tile: the number of
//! `Infected` agents currently standing on that tile.  The health lifecycle
//! in `epi-sim` is its only mutator; a counter changes exactly when an agent
//! becomes infected, recovers, or moves while infected.
//!
//! The key query is [`OccupancyGrid::windowed_sum`]: the total infected count
//! in a square neighborhood around a tile, which the infection decision uses
//! as the local hazard ("pressure").
//!
//! # Invariant
//!
//! At every instant, `grid.total()` equals the number of agents whose status
//! is `Infected`.  A decrement that would take any counter below zero means
//! the lifecycle double-applied a transition; the grid reports it as a fatal
//! [`GridError::Underflow`] rather than clamping.

pub mod error;
pub mod grid;


pub use error::{GridError, GridResult};
pub use grid::OccupancyGrid;
