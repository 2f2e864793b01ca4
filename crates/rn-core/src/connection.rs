//! One row of a connections file.

/// A connection between two stations as read from input.
///
/// The topology builder uses `line` to assemble each line's station order.
/// The reachability oracle treats the pair as an undirected edge and ignores
/// `line` and `direction`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub source:    String,
    pub target:    String,
    pub line:      String,
    /// Free-form label from the input (e.g. `N`, `S`).  Carried, never
    /// interpreted.
    pub direction: String,
}

impl Connection {
    pub fn new(
        source:    impl Into<String>,
        target:    impl Into<String>,
        line:      impl Into<String>,
        direction: impl Into<String>,
    ) -> Self {
        Self {
            source:    source.into(),
            target:    target.into(),
            line:      line.into(),
            direction: direction.into(),
        }
    }
}
