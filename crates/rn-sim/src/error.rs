use rn_movement::MovementError;
use rn_topology::TopologyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("train placement failed: {0}")]
    Movement(#[from] MovementError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

pub type SimResult<T> = Result<T, SimError>;
