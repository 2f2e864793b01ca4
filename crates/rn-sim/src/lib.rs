//! `rn-sim` — tick loop driver for the railnet simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in current..config.total_ticks:
//!   observer.on_tick_start(tick)
//!   report = MovementEngine::advance_tick(&mut network)
//!   observer.on_tick_end(tick, &report)
//!   every output_interval_ticks: observer.on_snapshot(tick, &network)
//! observer.on_sim_end(final_tick)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Plans train moves on Rayon's thread pool.              |
//! | `fx-hash`  | FxHash adjacency index for route queries.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rn_core::SimConfig;
//! use rn_sim::{NoopObserver, SimBuilder};
//!
//! let network = rn_topology::load_network(&stations, &connections)?;
//! let config = SimConfig { total_ticks: 100, seed: Some(42), train_count: 10, ..Default::default() };
//! let mut sim = SimBuilder::from_config(config, network).build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use sim::Sim;

pub use rn_movement::{Placement, TickReport, TrainEvent};
