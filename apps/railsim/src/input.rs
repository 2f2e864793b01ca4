//! Parsing of typed user input.
//!
//! Everything here is pure: the prompt loops in [`crate::console`] decide
//! what to print and when to ask again.

use thiserror::Error;

use rn_core::TrainId;

/// One entry of the main menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Advance,
    TrainInfo,
    RouteInfo,
    Map,
    Quit,
}

impl MenuChoice {
    pub const PROMPT: &'static str = "Continue simulation [1], train info [2], route info [3], \
         show rail network map [4], exit [q].\nSelect an option: ";

    /// Case-insensitive; spaces and dots are ignored, so `" 1. "` and `"Q"`
    /// are accepted.
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let cleaned: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '.')
            .flat_map(char::to_lowercase)
            .collect();
        match cleaned.as_str() {
            "1" => Some(MenuChoice::Advance),
            "2" => Some(MenuChoice::TrainInfo),
            "3" => Some(MenuChoice::RouteInfo),
            "4" => Some(MenuChoice::Map),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Why a train count was rejected.  The messages are shown verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainCountError {
    #[error("We don't have the processing power to simulate an infinite number of trains, sorry. But we're getting there.")]
    Infinite,

    #[error("You need to have at least one train.")]
    BelowOne,

    #[error("Input a valid integer (no decimal numbers or any other nonsense).")]
    NotInteger,
}

/// Parse a train count.  Case and spaces are ignored.
pub fn parse_train_count(input: &str) -> Result<usize, TrainCountError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    match cleaned.as_str() {
        "infinity" | "inf" | "infinite" => {
            return Err(TrainCountError::Infinite);
        }
        "-infinity" | "-inf" | "-infinite" => return Err(TrainCountError::BelowOne),
        _ => {}
    }
    let n: i128 = cleaned.parse().map_err(|_| TrainCountError::NotInteger)?;
    if n < 1 {
        return Err(TrainCountError::BelowOne);
    }
    usize::try_from(n).map_err(|_| TrainCountError::Infinite)
}

/// Why a train number was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainIdError {
    #[error("Invalid input. Don't input nonsense.")]
    NotInteger,

    #[error("Invalid input. Input the ID number of a train that exists.")]
    OutOfRange,
}

/// Parse a train number in `1..=train_count`.
pub fn parse_train_id(input: &str, train_count: usize) -> Result<TrainId, TrainIdError> {
    let n: i64 = input.trim().parse().map_err(|_| TrainIdError::NotInteger)?;
    if n < 1 || n as u64 > train_count as u64 {
        return Err(TrainIdError::OutOfRange);
    }
    u32::try_from(n).map(TrainId).map_err(|_| TrainIdError::OutOfRange)
}

/// Parse a hop limit.  Negative values become `0`; values past `u32::MAX`
/// saturate.  `None` if the input is not an integer.
pub fn parse_hop_limit(input: &str) -> Option<u32> {
    let n: i128 = input.trim().parse().ok()?;
    Some(n.clamp(0, u32::MAX as i128) as u32)
}
