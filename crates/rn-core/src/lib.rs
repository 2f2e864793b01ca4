//! `rn-core` — foundational types for the `railnet` simulator.
//!
//! Every other `rn-*` crate depends on this one.  It has no `rn-*`
//! dependencies and only `rand` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TrainId`, `StationId`, `LineId`                      |
//! | [`direction`]   | `Direction` (`North` / `South`)                       |
//! | [`connection`]  | `Connection` — one `source,target,line,direction` row |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`rng`]         | `RandomSource`, `SimRng`, `SequenceRng`               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod connection;
pub mod direction;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use connection::Connection;
pub use direction::Direction;
pub use ids::{LineId, StationId, TrainId};
pub use rng::{RandomSource, SequenceRng, SimRng};
pub use time::{SimConfig, Tick};
