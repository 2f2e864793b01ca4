//! Stations and their train occupancy.

use std::fmt;

use rn_core::{StationId, TrainId};

use crate::{TopologyError, TopologyResult};

/// Input descriptor for one station: a `name,delay_probability` row.
#[derive(Clone, Debug, PartialEq)]
pub struct StationSpec {
    pub name:              String,
    pub delay_probability: f64,
}

impl StationSpec {
    pub fn new(name: impl Into<String>, delay_probability: f64) -> Self {
        Self { name: name.into(), delay_probability }
    }

    /// Reject empty names and probabilities outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> TopologyResult<()> {
        if self.name.trim().is_empty() {
            return Err(TopologyError::EmptyName { what: "station" });
        }
        if !(0.0..=1.0).contains(&self.delay_probability) {
            return Err(TopologyError::InvalidProbability {
                name:  self.name.clone(),
                value: self.delay_probability,
            });
        }
        Ok(())
    }
}

/// A station on the network.
///
/// `trains` lists the trains currently standing here.  Its order carries no
/// meaning; membership does.  Only [`RailNetwork`](crate::RailNetwork) may
/// change it, so it always agrees with each train's own station.
#[derive(Clone, Debug)]
pub struct Station {
    pub id:                StationId,
    pub name:              String,
    /// Chance in `[0, 1]` that a train standing here is held for a tick.
    pub delay_probability: f64,
    trains:                Vec<TrainId>,
}

impl Station {
    pub(crate) fn new(id: StationId, spec: StationSpec) -> Self {
        Self {
            id,
            name:              spec.name,
            delay_probability: spec.delay_probability,
            trains:            Vec::new(),
        }
    }

    /// Trains currently at this station.
    #[inline]
    pub fn trains(&self) -> &[TrainId] {
        &self.trains
    }

    #[inline]
    pub fn train_count(&self) -> usize {
        self.trains.len()
    }

    #[inline]
    pub fn has_train(&self, train: TrainId) -> bool {
        self.trains.contains(&train)
    }

    pub(crate) fn add_train(&mut self, train: TrainId) {
        debug_assert!(!self.has_train(train), "{train} already at {}", self.name);
        self.trains.push(train);
    }

    /// Returns `false` if `train` was not here.
    pub(crate) fn remove_train(&mut self, train: TrainId) -> bool {
        match self.trains.iter().position(|&t| t == train) {
            Some(i) => {
                self.trains.remove(i);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Station {} with delay probability {} and {} trains",
            self.name,
            self.delay_probability,
            self.trains.len()
        )
    }
}
