//! Move application and outcome detection.
//!
//! Every function here is pure: it reads a [`GameState`] and returns a new
//! value. The caller owns the single live state and decides what to keep.

use super::error::MoveError;
#[cfg(debug_assertions)]
use super::invariants::{describe, GameInvariants, InvariantSet};
use super::lines::WIN_LINES;
use super::outcome::{Outcome, Status};
use super::position::Position;
use super::types::GameState;
use tracing::{debug, instrument, trace, warn};

/// Returns the canonical empty state with X to move.
#[instrument]
pub fn reset_game() -> GameState {
    debug!("Starting a new game");
    GameState::new()
}

/// Derives the outcome of `state`.
///
/// Lines are scanned in [`WIN_LINES`] order and the first completed line is
/// reported, so the highlighted line is stable when a single move completes
/// two at once.
pub fn compute_outcome(state: &GameState) -> Outcome {
    let board = state.board();

    for line in WIN_LINES {
        if let Some(mark) = line.owner(board) {
            return Outcome::Won { mark, line };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Plays `state.next_mark()` at `position`, reporting why a move is refused.
#[instrument(skip(state), fields(next_mark = %state.next_mark()))]
pub fn try_move(state: &GameState, position: Position) -> Result<GameState, MoveError> {
    if compute_outcome(state).is_over() {
        return Err(MoveError::GameOver);
    }

    if !state.board().get(position).is_empty() {
        return Err(MoveError::CellOccupied(position));
    }

    let mut next = state.clone();
    next.place(position);

    // Moves preserve reachability; a hand-built board starts outside it.
    #[cfg(debug_assertions)]
    if GameInvariants::check_all(state).is_ok() {
        GameInvariants::check_all(&next).map_err(|violations| {
            MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                describe(&violations)
            ))
        })?;
    }

    trace!(board = %next.board(), "Move applied");
    Ok(next)
}

/// Plays `state.next_mark()` at `position`.
///
/// A move after the game has ended, or onto an occupied cell, is ignored: the
/// returned state equals `state`.
pub fn play_move(state: &GameState, position: Position) -> GameState {
    match try_move(state, position) {
        Ok(next) => next,
        Err(error) => {
            debug!(%position, %error, "Move ignored");
            state.clone()
        }
    }
}

/// Index-based form of [`play_move`].
///
/// An index outside 0-8 cannot come from the board UI, so it is logged as a
/// caller bug and the state is returned unchanged.
pub fn play_index(state: &GameState, index: usize) -> GameState {
    match Position::from_index(index) {
        Some(position) => play_move(state, position),
        None => {
            warn!(error = %MoveError::OutOfBounds(index), "Move ignored");
            state.clone()
        }
    }
}

impl GameState {
    /// Derives the outcome. See [`compute_outcome`].
    pub fn outcome(&self) -> Outcome {
        compute_outcome(self)
    }

    /// Derives the status line.
    pub fn status(&self) -> Status {
        Status::new(&self.outcome(), self.next_mark())
    }

    /// Returns true if a move at `position` would be accepted.
    pub fn is_cell_playable(&self, position: Position) -> bool {
        !self.outcome().is_over() && self.board().get(position).is_empty()
    }

    /// Positions a move would be accepted at, in index order. Empty once the
    /// game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.outcome().is_over() {
            return Vec::new();
        }
        self.board().empty_positions()
    }
}
