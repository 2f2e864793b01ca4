//! Travel direction along a line.
//!
//! A line's stations are stored in encounter order.  `North` walks toward
//! index 0, `South` walks toward the last index.

/// Which way a train is heading along its line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward the first station of the line (index decreases).
    North,
    /// Toward the last station of the line (index increases).
    South,
}

impl Direction {
    /// Both directions, in the order used for uniform random selection.
    pub const ALL: [Direction; 2] = [Direction::North, Direction::South];

    /// Human-readable label, also used in CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
