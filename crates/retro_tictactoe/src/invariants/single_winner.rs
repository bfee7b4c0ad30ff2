//! Single winner invariant.

use super::Invariant;
use crate::{GameState, Mark, WIN_LINES};

/// Invariant: completed lines, if any, all belong to the same mark.
///
/// Play stops at the first completed line, so two owners can only come from a
/// board that was never reached by legal moves.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let mut owners = WIN_LINES
            .iter()
            .filter_map(|line| line.owner(state.board()));
        match owners.next() {
            Some(first) => owners.all(|mark: Mark| mark == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one mark owns a completed line"
    }
}
