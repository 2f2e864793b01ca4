//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! abstract time unit in which every train attempts exactly one move; there
//! is no mapping to wall-clock time.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// The `railsim` binary fills this from its command line; library users
/// build it directly or deserialize it (feature `serde`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed.  `None` seeds from OS entropy (non-reproducible).
    pub seed: Option<u64>,

    /// Trains placed at random when no explicit placements are given.
    /// Must be at least 1.
    pub train_count: usize,

    /// Emit a snapshot every N ticks.  1 = every tick; 0 = never.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// `true` if a snapshot is due at `tick`.
    #[inline]
    pub fn snapshot_due(&self, tick: Tick) -> bool {
        self.output_interval_ticks > 0 && tick.0.is_multiple_of(self.output_interval_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           0,
            seed:                  None,
            train_count:           1,
            output_interval_ticks: 1,
        }
    }
}
