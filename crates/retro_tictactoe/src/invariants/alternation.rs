//! Alternation invariant: X moves whenever the counts are level.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: `next_mark` is X exactly when X and O appear equally often.
pub struct AlternationInvariant;

impl Invariant<GameState> for AlternationInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let level = board.count(Mark::X) == board.count(Mark::O);
        (state.next_mark() == Mark::X) == level
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
