//! Lines: named, ordered station sequences.

use std::fmt;

use rn_core::{LineId, StationId};

/// A line such as "red" or "blue".
///
/// `stations` is in first-encounter order from the connections input.  The
/// first and last entries are the termini.  A station appears at most once
/// per line but may also appear on other lines.
#[derive(Clone, Debug)]
pub struct Line {
    pub id:   LineId,
    pub name: String,
    stations: Vec<StationId>,
}

impl Line {
    pub(crate) fn new(id: LineId, name: String) -> Self {
        Self { id, name, stations: Vec::new() }
    }

    /// Append `station` unless it is already on the line.  Returns `true` if
    /// it was appended.
    pub(crate) fn push_unique(&mut self, station: StationId) -> bool {
        if self.stations.contains(&station) {
            return false;
        }
        self.stations.push(station);
        true
    }

    #[inline]
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Position of `station` along the line.
    #[inline]
    pub fn position_of(&self, station: StationId) -> Option<usize> {
        self.stations.iter().position(|&s| s == station)
    }

    #[inline]
    pub fn contains(&self, station: StationId) -> bool {
        self.stations.contains(&station)
    }

    /// Index of the far terminus.  `0` for an empty line.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} line", self.name.to_uppercase())
    }
}
