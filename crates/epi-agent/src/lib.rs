//! `epi-agent` — Structure-of-Arrays agent registry for the `grid_epi` engine.
//!
//! Agents live in an arena indexed by [`AgentId`][epi_core::AgentId]: every
//! per-agent attribute is a `Vec` of length `count`, and the ID's integer
//! value is the index into all of them.  The health lifecycle, dwell
//! scheduler, and occupancy grid only ever reach agent state through this
//! registry — there are no per-agent closures or boxed agent objects.
//!
//! # Crate layout
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG) |
//! | [`builder`] | `AgentStoreBuilder` (construction + home placement)  |

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use store::{AgentRngs, AgentStore};
