//! Topology error type.

use thiserror::Error;

use rn_core::TrainId;

/// Errors produced by `rn-topology`.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("station {0:?} not found")]
    StationNotFound(String),

    #[error("line {0:?} not found")]
    LineNotFound(String),

    #[error("train {0} not found")]
    TrainNotFound(TrainId),

    #[error("station {0:?} is defined more than once")]
    DuplicateStation(String),

    #[error("{what} name must not be empty")]
    EmptyName { what: &'static str },

    #[error("station {name:?}: delay probability {value} is outside [0, 1]")]
    InvalidProbability { name: String, value: f64 },

    #[error("connection on line {line:?} references unknown station {station:?}")]
    UnknownStation { station: String, line: String },

    #[error("station {station:?} is not on line {line:?}")]
    StationNotOnLine { station: String, line: String },

    #[error("parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TopologyResult<T> = Result<T, TopologyError>;
