//! `rn-movement` — the per-tick train transition and initial placement.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`engine`]    | `MovementEngine<S>` — advances every train by one tick     |
//! | [`report`]    | `TickReport`, `TrainEvent` — what happened during a tick   |
//! | [`placement`] | `place_random`, `place_explicit`, `Placement`              |
//! | [`error`]     | `MovementError`, `MovementResult<T>`                       |
//!
//! # Movement model
//!
//! A tick visits every train once, in ascending `TrainId` order:
//!
//! 1. Clear the delay flag.
//! 2. Snap direction at a terminus: the first station turns the train
//!    `South`, the last station turns it `North`.
//! 3. Draw one uniform value; below the station's delay probability the
//!    train is held for this tick.
//! 4. Otherwise step one station along the line.
//!
//! No train's step depends on another train's step in the same tick, so the
//! engine splits the work into a sequential draw phase, a plan phase (on
//! Rayon with the `parallel` feature), and a sequential apply phase.

pub mod engine;
pub mod error;
pub mod placement;
pub mod report;


pub use engine::MovementEngine;
pub use error::{MovementError, MovementResult};
pub use placement::{place_explicit, place_random, Placement};
pub use report::{TickReport, TrainEvent};
