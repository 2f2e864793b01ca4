//! `rn-topology` — the rail network: stations, lines, trains, and loaders.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`station`] | `Station`, `StationSpec`                                    |
//! | [`line`]    | `Line` — ordered, duplicate-free station sequence           |
//! | [`train`]   | `Train`, `TrainSummary`                                     |
//! | [`network`] | `RailNetwork`, `RailNetworkBuilder`                         |
//! | [`loader`]  | stations / connections file readers, `load_network`         |
//! | [`error`]   | `TopologyError`, `TopologyResult<T>`                        |
//!
//! # Ownership
//!
//! `RailNetwork` owns every station, line and train in `Vec`s indexed by
//! typed ids.  A train refers to its station by `StationId`, and a station
//! lists the `TrainId`s it currently holds.  The two sides only change
//! together, through [`RailNetwork::move_train`].

pub mod error;
pub mod line;
pub mod loader;
pub mod network;
pub mod station;
pub mod train;

#[cfg(test)]
mod tests;

pub use error::{TopologyError, TopologyResult};
pub use line::Line;
pub use loader::{
    load_connections_csv, load_connections_reader, load_network, load_stations_csv,
    load_stations_reader,
};
pub use network::{RailNetwork, RailNetworkBuilder};
pub use station::{Station, StationSpec};
pub use train::{Train, TrainSummary};
