//! Plain data row types written by output backends.

use rn_core::{Direction, Tick};
use rn_topology::RailNetwork;

/// One train's position at a given tick, with names resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainSnapshotRow {
    pub tick:      u64,
    pub train_id:  u32,
    pub station:   String,
    pub line:      String,
    pub direction: Direction,
    pub delayed:   bool,
}

impl TrainSnapshotRow {
    /// One row per train in `network`, in `TrainId` order.
    pub fn collect(tick: Tick, network: &RailNetwork) -> Vec<TrainSnapshotRow> {
        network
            .trains()
            .iter()
            .map(|t| TrainSnapshotRow {
                tick:      tick.0,
                train_id:  t.id().0,
                station:   network.station(t.station()).name.clone(),
                line:      network.line(t.line()).name.clone(),
                direction: t.direction(),
                delayed:   t.delayed(),
            })
            .collect()
    }
}

/// Movement counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub moved_trains:   u64,
    pub delayed_trains: u64,
}
