//! Error types for the engine.

use super::position::Position;
use super::types::Mark;

/// Why a move was not applied.
///
/// [`play_move`](crate::play_move) swallows these and returns the state
/// unchanged; [`try_move`](crate::try_move) hands them back.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has a winner or the board is full.
    #[display("Game is already over")]
    GameOver,

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// Raw index outside 0-8.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// An invariant failed after the move was applied (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Why a board could not be parsed or a stored state was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// A symbol other than `X`, `O`, `.`, `_` or `-`.
    #[display("Invalid character {:?} at cell {}", character, index)]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Cell index it would have filled.
        index: usize,
    },

    /// Not exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// A state legal play cannot reach, with the failed checks.
    #[display("Unreachable state: {}", _0)]
    Unreachable(String),

    /// Stored turn disagrees with the mark counts.
    #[display("{} cannot be next to move on this board", _0)]
    WrongTurn(Mark),
}

impl std::error::Error for ParseError {}
