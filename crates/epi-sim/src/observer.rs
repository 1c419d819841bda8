//! Run observer trait for progress reporting.

/// Callbacks invoked by [`SimulationRun::run`][crate::SimulationRun::run] at
/// the points an outside consumer (UI, logger, batch runner) cares about.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — live counter
///
/// ```rust,ignore
/// struct LivePrinter;
///
/// impl RunObserver for LivePrinter {
///     fn on_infected_changed(&mut self, n: u32) {
///         println!("infected: {n}");
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called every time the run-wide infected count changes, including the
    /// initial notification for seeded infections.
    fn on_infected_changed(&mut self, _infected: u32) {}

    /// Called exactly once, after the run's final event has been processed
    /// and all remaining timers have been cancelled.  No other callback
    /// fires after this one.
    fn on_run_complete(&mut self, _average: f64, _max: u32) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
