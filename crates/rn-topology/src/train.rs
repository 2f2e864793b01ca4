//! Trains and their human-readable summary.

use std::fmt;

use rn_core::{Direction, LineId, StationId, TrainId};

/// A train running on one line.
///
/// All fields are private.  The station only changes together with the
/// stations' occupancy lists, via
/// [`RailNetwork::move_train`](crate::RailNetwork::move_train); direction and
/// delay flag via [`RailNetwork::set_train_state`](crate::RailNetwork::set_train_state).
/// Id and line are fixed at placement.
///
/// ```compile_fail
/// # use rn_core::TrainId;
/// # fn rewrite(train: &mut rn_topology::Train) {
/// train.id = TrainId(7);
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Train {
    id:        TrainId,
    line:      LineId,
    direction: Direction,
    delayed:   bool,
    station:   StationId,
}

impl Train {
    pub(crate) fn new(id: TrainId, station: StationId, direction: Direction, line: LineId) -> Self {
        Self { id, line, direction, delayed: false, station }
    }

    #[inline]
    pub fn id(&self) -> TrainId {
        self.id
    }

    #[inline]
    pub fn line(&self) -> LineId {
        self.line
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set when the train was held at its station during the most recent
    /// tick.  Cleared at the start of every tick.
    #[inline]
    pub fn delayed(&self) -> bool {
        self.delayed
    }

    #[inline]
    pub fn station(&self) -> StationId {
        self.station
    }

    pub(crate) fn set_station(&mut self, station: StationId) {
        self.station = station;
    }

    pub(crate) fn set_state(&mut self, direction: Direction, delayed: bool) {
        self.direction = direction;
        self.delayed = delayed;
    }
}

/// Owned, printable view of a train with names resolved.
///
/// Built by [`RailNetwork::train_summary`](crate::RailNetwork::train_summary).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainSummary {
    pub id:        TrainId,
    pub line:      String,
    pub station:   String,
    pub direction: Direction,
    pub delayed:   bool,
}

impl fmt::Display for TrainSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Train {} on {} line is at station {} heading in {} direction",
            self.id.0,
            self.line.to_uppercase(),
            self.station,
            self.direction
        )?;
        if self.delayed {
            f.write_str(" (DELAY)")?;
        }
        Ok(())
    }
}
