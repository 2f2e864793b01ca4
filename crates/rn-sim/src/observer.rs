//! Simulation observer trait for progress reporting and data collection.

use tracing::{debug, info};

use rn_core::Tick;
use rn_movement::TickReport;
use rn_topology::RailNetwork;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any train moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every train has been advanced.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), after `on_tick_end`.
    fn on_snapshot(&mut self, _tick: Tick, _network: &RailNetwork) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs a `debug!` line per tick and an `info!` line at the end of a run.
#[derive(Default)]
pub struct TracingObserver {
    moved:   u64,
    delayed: u64,
}

impl SimObserver for TracingObserver {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let moved = report.moved_trains();
        let delayed = report.delayed_trains();
        self.moved += moved as u64;
        self.delayed += delayed as u64;
        let held: Vec<u32> = report.delayed_train_ids().map(|t| t.0).collect();
        debug!(%tick, moved, delayed, ?held, "tick");
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!(%final_tick, moves = self.moved, delays = self.delayed, "simulation finished");
    }
}
