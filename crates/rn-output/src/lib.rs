//! `rn-output` — run output writers and map export for the railnet simulator.
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`writer`]   | `OutputWriter` trait                                        |
//! | [`csv`]      | `CsvWriter` — `train_snapshots.csv`, `tick_summaries.csv`   |
//! | [`observer`] | `SimOutputObserver<W>` — drives a writer from the tick loop |
//! | [`map`]      | `render_dot`, `write_dot` — Graphviz network map            |
//! | [`row`]      | `TrainSnapshotRow`, `TickSummaryRow`                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rn_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod map;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use map::{render_dot, write_dot};
pub use observer::SimOutputObserver;
pub use row::{TickSummaryRow, TrainSnapshotRow};
pub use writer::OutputWriter;
