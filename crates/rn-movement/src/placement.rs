//! Initial train placement.

use tracing::{debug, info};

use rn_core::{Direction, RandomSource, StationId, TrainId};
use rn_topology::RailNetwork;

use crate::{MovementError, MovementResult};

/// An explicit starting position for one train, by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub station:   String,
    pub line:      String,
    pub direction: Direction,
}

impl Placement {
    pub fn new(station: impl Into<String>, line: impl Into<String>, direction: Direction) -> Self {
        Self { station: station.into(), line: line.into(), direction }
    }
}

/// Add `count` trains at random positions.
///
/// For each train, in order: a uniform station among those served by at
/// least one line, a uniform direction, then a uniform line among the lines
/// serving that station.  That is three [`RandomSource::index`] draws per
/// train.  Returns the new train ids in ascending order.
///
/// # Errors
/// [`MovementError::NoServedStations`] if `count > 0` and no line serves any
/// station.
pub fn place_random<S: RandomSource + ?Sized>(
    network: &mut RailNetwork,
    count:   usize,
    rng:     &mut S,
) -> MovementResult<Vec<TrainId>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let served: Vec<StationId> = network
        .stations()
        .iter()
        .map(|s| s.id)
        .filter(|&id| !network.lines_serving(id).is_empty())
        .collect();
    if served.is_empty() {
        return Err(MovementError::NoServedStations);
    }

    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let station = served[rng.index(served.len())];
        let direction = Direction::ALL[rng.index(Direction::ALL.len())];
        let lines = network.lines_serving(station);
        let line = lines[rng.index(lines.len())];

        let id = network.add_train(station, direction, line)?;
        debug!(train = %id, station = %station, line = %line, %direction, "placed");
        ids.push(id);
    }
    info!(trains = count, stations = served.len(), "trains placed");
    Ok(ids)
}

/// Add one train per placement, resolving station and line names.
///
/// Stops at the first placement that names an unknown station or line, or a
/// station the line does not serve; trains added before it remain.
pub fn place_explicit(
    network:    &mut RailNetwork,
    placements: &[Placement],
) -> MovementResult<Vec<TrainId>> {
    let mut ids = Vec::with_capacity(placements.len());
    for p in placements {
        let station = network.station_id(&p.station)?;
        let line = network.line_id(&p.line)?;
        ids.push(network.add_train(station, p.direction, line)?);
    }
    info!(trains = ids.len(), "trains placed explicitly");
    Ok(ids)
}
