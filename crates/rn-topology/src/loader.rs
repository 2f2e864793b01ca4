//! Stations and connections file loaders.
//!
//! # File formats
//!
//! Both files are header-less, comma-separated, one record per line.
//! Surrounding whitespace in fields is trimmed and blank lines are skipped.
//!
//! Stations — `name,delay_probability`:
//!
//! ```text
//! A,0.05
//! B,0.1
//! C,0.2
//! ```
//!
//! Connections — `source,target,line,direction`:
//!
//! ```text
//! A,B,blue,S
//! B,C,blue,S
//! ```
//!
//! A record with the wrong number of fields, or a probability that is not a
//! number, is a [`TopologyError::Parse`] carrying the 1-based line number.
//! Range and cross-reference checks happen when the records are fed to
//! [`RailNetworkBuilder`](crate::RailNetworkBuilder).

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::info;

use rn_core::Connection;

use crate::{RailNetwork, StationSpec, TopologyError, TopologyResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StationRecord {
    name:              String,
    delay_probability: f64,
}

#[derive(Deserialize)]
struct ConnectionRecord {
    source:    String,
    target:    String,
    line:      String,
    direction: String,
}

const STATION_FIELDS:    usize = 2;
const CONNECTION_FIELDS: usize = 4;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load station descriptors from a file.
pub fn load_stations_csv(path: &Path) -> TopologyResult<Vec<StationSpec>> {
    let file = std::fs::File::open(path)?;
    load_stations_reader(file)
}

/// Like [`load_stations_csv`] but accepts any `Read` source.
pub fn load_stations_reader<R: Read>(reader: R) -> TopologyResult<Vec<StationSpec>> {
    read_records(reader, STATION_FIELDS, |rec: StationRecord| {
        StationSpec::new(rec.name, rec.delay_probability)
    })
}

/// Load connection descriptors from a file.
///
/// The result can feed both the topology builder and the reachability
/// oracle, so a route query may use a different file than the one the
/// network was built from.
pub fn load_connections_csv(path: &Path) -> TopologyResult<Vec<Connection>> {
    let file = std::fs::File::open(path)?;
    load_connections_reader(file)
}

/// Like [`load_connections_csv`] but accepts any `Read` source.
pub fn load_connections_reader<R: Read>(reader: R) -> TopologyResult<Vec<Connection>> {
    read_records(reader, CONNECTION_FIELDS, |rec: ConnectionRecord| {
        Connection::new(rec.source, rec.target, rec.line, rec.direction)
    })
}

/// Load both files and build a train-less [`RailNetwork`].
pub fn load_network(stations_path: &Path, connections_path: &Path) -> TopologyResult<RailNetwork> {
    let stations = load_stations_csv(stations_path)?;
    let connections = load_connections_csv(connections_path)?;
    let connection_count = connections.len();

    let network = RailNetwork::from_records(stations, connections)?;
    info!(
        stations    = network.station_count(),
        lines       = network.line_count(),
        connections = connection_count,
        "loaded rail network"
    );
    Ok(network)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_records<R, T, O, F>(reader: R, fields: usize, mut convert: F) -> TopologyResult<Vec<O>>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
    F: FnMut(T) -> O,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    let mut record = StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != fields {
            return Err(TopologyError::Parse {
                line,
                message: format!("expected {fields} fields, found {}", record.len()),
            });
        }
        let row: T = record
            .deserialize(None)
            .map_err(|e| TopologyError::Parse { line, message: e.to_string() })?;
        out.push(convert(row));
    }
    Ok(out)
}
