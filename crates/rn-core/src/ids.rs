//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.
//!
//! `StationId` and `LineId` are dense 0-based indices into the network's
//! `Vec`s.  `TrainId` is the user-facing train number and starts at **1**;
//! use [`TrainId::slot`] to get its 0-based storage position.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a station in `RailNetwork` storage.
    pub struct StationId(u32);
}

typed_id! {
    /// Index of a line in `RailNetwork` storage.
    pub struct LineId(u32);
}

typed_id! {
    /// Train number, `1..=N` for a run with `N` trains.
    pub struct TrainId(u32);
}

impl StationId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl LineId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TrainId {
    /// The first train number handed out in a run.
    pub const FIRST: TrainId = TrainId(1);

    /// 0-based storage position, or `None` for the invalid id `0`.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    /// Inverse of [`slot`](Self::slot).
    #[inline]
    pub fn from_slot(slot: usize) -> TrainId {
        debug_assert!(slot < u32::MAX as usize);
        TrainId(slot as u32 + 1)
    }
}
