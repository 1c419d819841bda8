//! `EventQueue` — the virtual-time discrete-event queue driving a run.
//!
//! # Why this exists
//!
//! The model's natural phrasing is timer callbacks: "recover in ~25 s",
//! "leave home in 3–8 s", "sample every 500 ms".  Real timers would make
//! runs slow, nondeterministic, and hard to cancel.  Instead every delayed
//! action is queued under the virtual instant it fires at; the run loop
//! drains the queue in timestamp order and a whole run completes as fast as
//! the events can be processed.
//!
//! Cancellation-by-stop falls out for free: when the loop declines to pop
//! events at or past the end instant, every outstanding timer for every
//! agent is dead at once.
//!
//! # Ordering
//!
//! Events under the same tick execute in insertion order (`VecDeque` per
//! tick).  The engine is single-threaded, so insertion order — and with it
//! the whole run — is deterministic for a fixed seed.

use std::collections::{BTreeMap, VecDeque};

use epi_core::{AgentId, Tick};

/// One scheduled occurrence inside a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An agent's dwell at its current location expired; time to depart.
    DwellEnd(AgentId),
    /// An agent's trip completes; it materializes at its destination tile.
    Arrival(AgentId),
    /// An infected agent's recovery timer fires.
    Recovery(AgentId),
    /// A recovered agent's temporary immunity wears off.
    ImmunityEnd(AgentId),
    /// Periodic statistics sample; reschedules itself.
    Sample,
    /// Periodic infection re-check for stationary agents; reschedules itself.
    IdleSweep,
}

/// A priority queue mapping virtual instants → events that fire then.
#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<Tick, VecDeque<Event>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire at `tick`.
    pub fn push(&mut self, tick: Tick, event: Event) {
        self.inner.entry(tick).or_default().push_back(event);
        self.total += 1;
    }

    /// Remove and return the earliest event strictly before `end`, or `None`
    /// if the queue is empty or the next event is at/after `end`.
    ///
    /// Events within the same tick come out in insertion order.
    pub fn pop_before(&mut self, end: Tick) -> Option<(Tick, Event)> {
        let mut entry = self.inner.first_entry()?;
        let tick = *entry.key();
        if tick >= end {
            return None;
        }
        let events = entry.get_mut();
        let event = events.pop_front()?;
        if events.is_empty() {
            entry.remove();
        }
        self.total -= 1;
        Some((tick, event))
    }

    /// The earliest tick with at least one queued event, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Discard every queued event — the en-masse timer cancellation that
    /// ends a run.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }

    /// Total number of queued events across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
