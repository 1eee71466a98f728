//! Run observer trait for progress reporting.

use sr_core::Tick;
use sr_behavior::Status;

use crate::outcome::ScenarioReport;

/// Callbacks invoked by [`Scenario::run`][crate::Scenario::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl ScenarioObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, root: Status) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: tree {root}");
///         }
///     }
/// }
/// ```
pub trait ScenarioObserver {
    /// Called at the start of each cycle, before the world steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each cycle with the root node's status.
    fn on_tick_end(&mut self, _tick: Tick, _root: Status) {}

    /// Called when a criterion latches `Failed` (the cycle it decides the
    /// run).
    fn on_criterion_failed(&mut self, _tick: Tick, _name: &str) {}

    /// Called once after teardown, with the final report.
    fn on_scenario_end(&mut self, _report: &ScenarioReport) {}
}

/// A [`ScenarioObserver`] that does nothing.  Use when you need to call
/// `run` but don't want progress callbacks.
pub struct NoopObserver;

impl ScenarioObserver for NoopObserver {}
