//! Winner moved last: nobody plays on after a line is completed.

use super::Invariant;
use crate::{compute_outcome, GameState, Mark};

/// Invariant: if a mark owns a line, that mark made the latest move.
///
/// X has just moved when X leads by one; O has just moved when the counts are
/// level.
pub struct WinnerMovedLastInvariant;

impl Invariant<GameState> for WinnerMovedLastInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        match compute_outcome(state).winner() {
            Some(Mark::X) => x == o + 1,
            Some(Mark::O) => x == o,
            None => true,
        }
    }

    fn description() -> &'static str {
        "No move follows a completed line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_win_on_last_move_holds() {
        let state: GameState = "XXX|OO.|...".parse().unwrap();
        assert!(WinnerMovedLastInvariant::holds(&state));
    }

    #[test]
    fn test_o_win_on_last_move_holds() {
        let state: GameState = "OOO|XX.|X..".parse().unwrap();
        assert!(WinnerMovedLastInvariant::holds(&state));
    }

    #[test]
    fn test_o_move_after_x_win_violates() {
        let state: GameState = "XXX|OO.|O..".parse().unwrap();
        assert!(!WinnerMovedLastInvariant::holds(&state));
    }

    #[test]
    fn test_no_winner_holds() {
        let state: GameState = "XOX|OXO|OXO".parse().unwrap();
        assert!(WinnerMovedLastInvariant::holds(&state));
    }
}
