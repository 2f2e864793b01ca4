//! The `Sim` struct and its tick loop.

use rn_core::{RandomSource, SimConfig, Tick, TrainId};
use rn_movement::{MovementEngine, TickReport};
use rn_reach::reachable;
use rn_topology::{RailNetwork, TrainSummary};

use crate::{NoopObserver, SimObserver, SimResult};

/// The main simulation runner.
///
/// Owns the rail network and the movement engine.  Every tick goes through
/// `&mut self`, so no query can observe a half-applied tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: RandomSource> {
    pub config: SimConfig,

    /// The next tick to be processed.
    pub current_tick: Tick,

    pub network: RailNetwork,

    pub(crate) engine: MovementEngine<S>,
}

impl<S: RandomSource> Sim<S> {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Process a single tick without an observer.
    pub fn step(&mut self) -> TickReport {
        self.process_tick(&mut NoopObserver)
    }

    /// Run from the current tick to `config.end_tick()`, then call
    /// `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.current_tick < self.config.end_tick() {
            self.process_tick(observer);
        }
        observer.on_sim_end(self.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        let now = self.current_tick;
        observer.on_tick_start(now);
        let report = self.engine.advance_tick(&mut self.network);
        observer.on_tick_end(now, &report);
        if self.config.snapshot_due(now) {
            observer.on_snapshot(now, &self.network);
        }
        self.current_tick = now.next();
        report
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Whether `target` can be reached from `start` within `hop_limit`
    /// connections, over the network's own connection list.
    pub fn reachable(&self, start: &str, target: &str, hop_limit: u32) -> bool {
        reachable(self.network.connections(), start, target, hop_limit)
    }

    pub fn train_summary(&self, id: TrainId) -> SimResult<TrainSummary> {
        Ok(self.network.train_summary(id)?)
    }
}
