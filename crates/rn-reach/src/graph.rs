//! Undirected adjacency index over borrowed station names.

use rn_core::Connection;

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "fx-hash")]
pub(crate) type Set<K> = rustc_hash::FxHashSet<K>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type Set<K> = std::collections::HashSet<K>;

/// Station name → neighbouring station names.
///
/// Every connection contributes `target` to `source`'s list and `source` to
/// `target`'s list.  Each list keeps connection-list order, which fixes the
/// order in which the BFS enqueues neighbours.  Parallel connections (the
/// same pair on two lines) appear once per connection.
///
/// Borrows the names from the connection slice; build it once and reuse it
/// for many queries.
pub struct ConnectionGraph<'a> {
    adjacency: Map<&'a str, Vec<&'a str>>,
}

impl<'a> ConnectionGraph<'a> {
    pub fn from_connections(connections: &'a [Connection]) -> Self {
        let mut adjacency: Map<&'a str, Vec<&'a str>> = Map::default();
        for conn in connections {
            adjacency.entry(conn.source.as_str()).or_default().push(conn.target.as_str());
            adjacency.entry(conn.target.as_str()).or_default().push(conn.source.as_str());
        }
        Self { adjacency }
    }

    /// Neighbours of `station`; empty for names that appear in no connection.
    #[inline]
    pub fn neighbors(&self, station: &str) -> &[&'a str] {
        self.adjacency.get(station).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct station names mentioned by the connections.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }
}
