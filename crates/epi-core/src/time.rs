//! Virtual simulation time.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter measured in **virtual
//! milliseconds**.  All configured durations (dwell times, recovery time,
//! run duration) are expressed in the same unit, so schedule arithmetic is
//! exact integer math with no floating-point drift.
//!
//! There is no mapping to wall-clock time: the engine never sleeps.  A run
//! advances by draining a discrete-event queue in timestamp order, so a
//! "ten minute" simulation completes in however long the event processing
//! takes — typically milliseconds.

use std::fmt;

/// An absolute simulation timestamp in virtual milliseconds.
///
/// Stored as `u64` to avoid overflow: at millisecond resolution a u64 lasts
/// ~585 million years of simulated time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
