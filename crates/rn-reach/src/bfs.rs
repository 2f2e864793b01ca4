//! Bounded breadth-first search.
//!
//! # Hop counting
//!
//! The queue is seeded with `(start, 1)` and each expansion adds one, so a
//! station first dequeued with count `k` lies `k - 1` hops from `start`.  A
//! dequeued station is compared with the target *before* the limit check;
//! an entry whose count exceeds `hop_limit` is dropped without expansion and
//! the search goes on with the rest of the queue.  Together that accepts
//! targets up to `hop_limit` hops away and nothing further.
//!
//! # Visited marking
//!
//! A station is marked visited when it is dequeued, not when it is enqueued.
//! The same station may therefore sit in the queue several times (reached
//! via different paths in the same layer) and is expanded each time it is
//! dequeued.  Only neighbours already marked visited are filtered out.  The
//! answer is the same as with enqueue-time marking; the amount of work is
//! not, and [`SearchStats`] exposes it.

use std::collections::VecDeque;

use tracing::trace;

use rn_core::Connection;

use crate::graph::{ConnectionGraph, Set};

/// Work done by one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Queue entries popped.
    pub dequeued: usize,
    /// Entries whose neighbours were scanned.
    pub expanded: usize,
}

/// `true` if `target` can be reached from `start` in at most `hop_limit`
/// hops over `connections`, taken as undirected edges.
///
/// `start == target` is always reachable, even at `hop_limit == 0` and even
/// when neither name occurs in `connections`.  Unknown names are otherwise
/// simply unreachable.
pub fn reachable(connections: &[Connection], start: &str, target: &str, hop_limit: u32) -> bool {
    if start == target {
        return true;
    }
    ConnectionGraph::from_connections(connections).reachable(start, target, hop_limit)
}

impl ConnectionGraph<'_> {
    /// See [`reachable`](crate::reachable).
    pub fn reachable(&self, start: &str, target: &str, hop_limit: u32) -> bool {
        self.search(start, target, hop_limit).0
    }

    /// Run the search and also report how much work it did.
    pub fn search(&self, start: &str, target: &str, hop_limit: u32) -> (bool, SearchStats) {
        let mut stats = SearchStats::default();
        if start == target {
            return (true, stats);
        }

        let limit = u64::from(hop_limit);
        let mut queue: VecDeque<(&str, u64)> = VecDeque::from([(start, 1)]);
        let mut visited: Set<&str> = Set::default();

        let mut found = false;
        while let Some((station, hops)) = queue.pop_front() {
            stats.dequeued += 1;
            if station == target {
                found = true;
                break;
            }
            if hops > limit {
                continue;
            }
            visited.insert(station);
            stats.expanded += 1;
            for &next in self.neighbors(station) {
                if !visited.contains(next) {
                    queue.push_back((next, hops + 1));
                }
            }
        }

        trace!(start, target, hop_limit, found, dequeued = stats.dequeued, "reachability query");
        (found, stats)
    }
}
