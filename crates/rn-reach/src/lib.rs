//! `rn-reach` — "can I get from station A to station B within N hops?"
//!
//! The oracle works on a flat list of [`Connection`](rn_core::Connection)s
//! treated as undirected edges.  It knows nothing about `RailNetwork`, so the
//! list can come from a live network or from a separately loaded file.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`graph`] | `ConnectionGraph` — adjacency index built from connections  |
//! | [`bfs`]   | `reachable`, `SearchStats` — bounded breadth-first search   |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for the adjacency index.   |
//!
//! # Example
//!
//! ```
//! use rn_core::Connection;
//!
//! let conns = vec![
//!     Connection::new("A", "B", "blue", "S"),
//!     Connection::new("B", "C", "blue", "S"),
//! ];
//! assert!(rn_reach::reachable(&conns, "A", "C", 2));
//! assert!(!rn_reach::reachable(&conns, "A", "C", 1));
//! ```

pub mod bfs;
pub mod graph;


pub use bfs::{reachable, SearchStats};
pub use graph::ConnectionGraph;
