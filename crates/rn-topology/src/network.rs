//! Rail network representation and builder.
//!
//! # Data layout
//!
//! Stations, lines and trains live in plain `Vec`s indexed by their typed
//! ids (`TrainId` via [`TrainId::slot`]).  Name lookups go through a
//! `HashMap<String, _>` side index.  `lines_by_station` is filled once at
//! build time so "which lines serve this station" is a slice lookup.
//!
//! Structure (stations, lines, line order, connections) is frozen by
//! [`RailNetworkBuilder::build`].  Afterwards only train state mutates:
//! direction and delay flag through [`RailNetwork::set_train_state`], and
//! position through [`RailNetwork::move_train`].  `Train` has no public
//! fields, so a train's station and the occupancy lists cannot drift apart.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use rn_core::{Connection, Direction, LineId, StationId, TrainId};

use crate::{Line, Station, StationSpec, TopologyError, TopologyResult, Train, TrainSummary};

// ── RailNetwork ───────────────────────────────────────────────────────────────

/// Stations, lines, trains, and the connection list they were built from.
///
/// Do not construct directly; use [`RailNetworkBuilder`].
#[derive(Clone, Debug)]
pub struct RailNetwork {
    stations:         Vec<Station>,
    station_ids:      HashMap<String, StationId>,
    lines:            Vec<Line>,
    line_ids:         HashMap<String, LineId>,
    /// Lines serving each station, indexed by `StationId`, in `LineId` order.
    lines_by_station: Vec<Vec<LineId>>,
    trains:           Vec<Train>,
    connections:      Vec<Connection>,
}

impl RailNetwork {
    /// Build a network straight from station and connection records.
    pub fn from_records(
        stations:    impl IntoIterator<Item = StationSpec>,
        connections: impl IntoIterator<Item = Connection>,
    ) -> TopologyResult<Self> {
        let mut b = RailNetworkBuilder::new();
        for spec in stations {
            b.add_station(spec)?;
        }
        for conn in connections {
            b.add_connection(conn)?;
        }
        Ok(b.build())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn train_count(&self) -> usize {
        self.trains.len()
    }

    // ── Stations ──────────────────────────────────────────────────────────

    #[inline]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// # Panics
    /// Panics if `id` does not belong to this network.
    #[inline]
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    pub fn station_id(&self, name: &str) -> TopologyResult<StationId> {
        self.station_ids
            .get(name)
            .copied()
            .ok_or_else(|| TopologyError::StationNotFound(name.to_owned()))
    }

    pub fn station_by_name(&self, name: &str) -> TopologyResult<&Station> {
        self.station_id(name).map(|id| self.station(id))
    }

    /// Lines that include `station`, in `LineId` order.
    #[inline]
    pub fn lines_serving(&self, station: StationId) -> &[LineId] {
        &self.lines_by_station[station.index()]
    }

    // ── Lines ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// # Panics
    /// Panics if `id` does not belong to this network.
    #[inline]
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    pub fn line_id(&self, name: &str) -> TopologyResult<LineId> {
        self.line_ids
            .get(name)
            .copied()
            .ok_or_else(|| TopologyError::LineNotFound(name.to_owned()))
    }

    pub fn line_by_name(&self, name: &str) -> TopologyResult<&Line> {
        self.line_id(name).map(|id| self.line(id))
    }

    // ── Connections ───────────────────────────────────────────────────────

    /// The connection records the network was built from, in input order.
    #[inline]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    // ── Trains ────────────────────────────────────────────────────────────

    /// All trains in ascending `TrainId` order.
    #[inline]
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn train(&self, id: TrainId) -> TopologyResult<&Train> {
        id.slot()
            .and_then(|slot| self.trains.get(slot))
            .ok_or(TopologyError::TrainNotFound(id))
    }

    /// Resolve a train's station and line names for display.
    pub fn train_summary(&self, id: TrainId) -> TopologyResult<TrainSummary> {
        let train = self.train(id)?;
        Ok(TrainSummary {
            id,
            line:      self.line(train.line()).name.clone(),
            station:   self.station(train.station()).name.clone(),
            direction: train.direction(),
            delayed:   train.delayed(),
        })
    }

    /// Put a new train at `station` running on `line`.
    ///
    /// Train ids are handed out sequentially from [`TrainId::FIRST`].
    pub fn add_train(
        &mut self,
        station:   StationId,
        direction: Direction,
        line:      LineId,
    ) -> TopologyResult<TrainId> {
        if !self.line(line).contains(station) {
            return Err(TopologyError::StationNotOnLine {
                station: self.station(station).name.clone(),
                line:    self.line(line).name.clone(),
            });
        }
        let id = TrainId::from_slot(self.trains.len());
        self.trains.push(Train::new(id, station, direction, line));
        self.stations[station.index()].add_train(id);
        Ok(id)
    }

    /// Set a train's heading and delay flag.
    ///
    /// # Panics
    /// Panics if `train` does not belong to this network.
    pub fn set_train_state(&mut self, train: TrainId, direction: Direction, delayed: bool) {
        let slot = self.train_slot(train);
        self.trains[slot].set_state(direction, delayed);
    }

    /// Move `train` to station `to`: remove from its current station first,
    /// then append to `to`, then update the train's own station reference.
    ///
    /// Moving a train to the station it is already at is allowed; it ends up
    /// at the back of that station's list.
    ///
    /// # Panics
    /// Panics if `train` or `to` does not belong to this network, if `to` is
    /// not on the train's line, or if the train is missing from its own
    /// station's list.
    pub fn move_train(&mut self, train: TrainId, to: StationId) {
        let slot = self.train_slot(train);
        let line = self.line(self.trains[slot].line());
        assert!(
            line.contains(to),
            "{train} cannot move to station {}: not on the {} line",
            self.station(to).name,
            line.name
        );
        let from = self.trains[slot].station();

        let removed = self.stations[from.index()].remove_train(train);
        assert!(removed, "{train} missing from its station {}", self.stations[from.index()].name);

        self.stations[to.index()].add_train(train);
        self.trains[slot].set_station(to);
    }

    fn train_slot(&self, train: TrainId) -> usize {
        match train.slot() {
            Some(slot) if slot < self.trains.len() => slot,
            _ => panic!("invalid train id {train}"),
        }
    }
}

impl fmt::Display for RailNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rail network with {} lines, {} stations, and {} trains",
            self.lines.len(),
            self.stations.len(),
            self.trains.len()
        )
    }
}

// ── RailNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RailNetwork`] incrementally, then call [`build`](Self::build).
///
/// Stations must be added before any connection that names them.  Each
/// connection creates its line on first sight and appends `source` then
/// `target` to it, skipping stations the line already has.
///
/// # Example
///
/// ```
/// use rn_core::Connection;
/// use rn_topology::{RailNetworkBuilder, StationSpec};
///
/// let mut b = RailNetworkBuilder::new();
/// b.add_station(StationSpec::new("A", 0.1)).unwrap();
/// b.add_station(StationSpec::new("B", 0.2)).unwrap();
/// b.add_connection(Connection::new("A", "B", "red", "S")).unwrap();
/// let net = b.build();
/// assert_eq!(net.line_by_name("red").unwrap().len(), 2);
/// ```
#[derive(Default)]
pub struct RailNetworkBuilder {
    stations:    Vec<Station>,
    station_ids: HashMap<String, StationId>,
    lines:       Vec<Line>,
    line_ids:    HashMap<String, LineId>,
    connections: Vec<Connection>,
}

impl RailNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station and return its id (sequential from 0).
    pub fn add_station(&mut self, spec: StationSpec) -> TopologyResult<StationId> {
        spec.validate()?;
        if self.station_ids.contains_key(&spec.name) {
            return Err(TopologyError::DuplicateStation(spec.name));
        }
        let id = StationId(self.stations.len() as u32);
        self.station_ids.insert(spec.name.clone(), id);
        self.stations.push(Station::new(id, spec));
        Ok(id)
    }

    /// Record a connection and extend its line.
    pub fn add_connection(&mut self, conn: Connection) -> TopologyResult<()> {
        if conn.line.trim().is_empty() {
            return Err(TopologyError::EmptyName { what: "line" });
        }
        let source = self.known_station(&conn.source, &conn.line)?;
        let target = self.known_station(&conn.target, &conn.line)?;

        let line_id = match self.line_ids.get(&conn.line) {
            Some(&id) => id,
            None => {
                let id = LineId(self.lines.len() as u32);
                debug!(line = %conn.line, "new line");
                self.line_ids.insert(conn.line.clone(), id);
                self.lines.push(Line::new(id, conn.line.clone()));
                id
            }
        };

        let line = &mut self.lines[line_id.index()];
        line.push_unique(source);
        line.push_unique(target);

        self.connections.push(conn);
        Ok(())
    }

    pub fn station_count(&self) -> usize { self.stations.len() }
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Consume the builder and produce a train-less [`RailNetwork`].
    pub fn build(self) -> RailNetwork {
        let mut lines_by_station = vec![Vec::new(); self.stations.len()];
        for line in &self.lines {
            for &s in line.stations() {
                lines_by_station[s.index()].push(line.id);
            }
        }

        RailNetwork {
            stations: self.stations,
            station_ids: self.station_ids,
            lines: self.lines,
            line_ids: self.line_ids,
            lines_by_station,
            trains: Vec::new(),
            connections: self.connections,
        }
    }

    fn known_station(&self, name: &str, line: &str) -> TopologyResult<StationId> {
        self.station_ids
            .get(name)
            .copied()
            .ok_or_else(|| TopologyError::UnknownStation {
                station: name.to_owned(),
                line:    line.to_owned(),
            })
    }
}
