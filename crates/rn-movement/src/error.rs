use rn_topology::TopologyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovementError {
    #[error("cannot place trains: no station is served by any line")]
    NoServedStations,

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

pub type MovementResult<T> = Result<T, MovementError>;
