//! Errors surfaced to callers that place moves from untrusted input

use crate::board::Cell;

/// Reasons a requested move cannot be applied
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Input that is not a cell number at all
    #[error("not a cell number: {0:?}")]
    InvalidInput(String),

    /// Cell number outside 1..=9
    #[error("cell {0} is off the board (choose 1-9)")]
    OutOfRange(usize),

    /// Cell already taken by either side
    #[error("cell {0} is already occupied")]
    Occupied(Cell),

    /// The game already has a result
    #[error("the game is already over")]
    GameOver,
}
