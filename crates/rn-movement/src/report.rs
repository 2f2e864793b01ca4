//! Per-tick movement report.

use rn_core::{StationId, TrainId};

/// What happened to one train during a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrainEvent {
    /// The delay draw held the train at `station`.
    Delayed { train: TrainId, station: StationId },
    /// The train left `from` and arrived at `to`.  `from == to` only on a
    /// single-station line.
    Arrived { train: TrainId, from: StationId, to: StationId },
}

impl TrainEvent {
    #[inline]
    pub fn train(&self) -> TrainId {
        match *self {
            TrainEvent::Delayed { train, .. } | TrainEvent::Arrived { train, .. } => train,
        }
    }
}

/// One event per train, in ascending `TrainId` order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub events: Vec<TrainEvent>,
}

impl TickReport {
    pub fn moved_trains(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TrainEvent::Arrived { .. }))
            .count()
    }

    pub fn delayed_trains(&self) -> usize {
        self.delayed_train_ids().count()
    }

    /// Ids of the trains held this tick, ascending.
    pub fn delayed_train_ids(&self) -> impl Iterator<Item = TrainId> + '_ {
        self.events
            .iter()
            .filter(|e| matches!(e, TrainEvent::Delayed { .. }))
            .map(TrainEvent::train)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
