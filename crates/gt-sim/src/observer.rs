//! Simulation observer trait for progress reporting and data collection.

use gt_core::Tick;

use crate::snapshot::Snapshot;

/// Per-tick movement tallies, handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Vehicles that advanced a cell this tick (arrivals included).
    pub moved: usize,

    /// Vehicles blocked by an occupied cell or a red light.
    pub waiting: usize,

    /// Vehicles that reached their destination spot this tick.
    pub arrivals: usize,
}

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — arrival logger
///
/// ```rust,ignore
/// struct ArrivalLogger;
///
/// impl SimObserver for ArrivalLogger {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         if report.arrivals > 0 {
///             println!("{tick}: {} vehicle(s) parked", report.arrivals);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any turn runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per tick, after all turns, with the closing state.
    ///
    /// This is the feed an external sink (JSON stream, visualiser bridge)
    /// taps; the snapshot is built fresh each tick and owned by the loop.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called at the end of each tick with its movement tallies.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
