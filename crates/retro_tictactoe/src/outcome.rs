//! Derived game results.
//!
//! Neither type here is ever stored alongside a [`GameState`](super::GameState).
//! Both are recomputed from the board on every read.

use super::lines::WinLine;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// `mark` holds every cell of `line`.
    Won {
        /// The winning mark.
        mark: Mark,
        /// First completed line in scan order.
        line: WinLine,
    },
    /// Board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns true once no further move can be accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the line to highlight, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// One-line status shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Status {
    /// Somebody completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Full board, no line.
    #[display("Draw: Cat's game")]
    Draw,
    /// Game continues with this mark to play.
    #[display("Turn: {}", _0)]
    Turn(Mark),
}

impl Status {
    /// Derives the status from an outcome and the mark to move.
    pub fn new(outcome: &Outcome, next_mark: Mark) -> Self {
        match outcome {
            Outcome::Won { mark, .. } => Status::Winner(*mark),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::Turn(next_mark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WIN_LINES;

    #[test]
    fn test_status_text() {
        let won = Outcome::Won {
            mark: Mark::O,
            line: WIN_LINES[4],
        };
        assert_eq!(Status::new(&won, Mark::X).to_string(), "Winner: O");
        assert_eq!(
            Status::new(&Outcome::Draw, Mark::O).to_string(),
            "Draw: Cat's game"
        );
        assert_eq!(
            Status::new(&Outcome::InProgress, Mark::O).to_string(),
            "Turn: O"
        );
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::InProgress.is_over());
        assert!(Outcome::Draw.is_over());
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Draw.winner(), None);

        let won = Outcome::Won {
            mark: Mark::X,
            line: WIN_LINES[6],
        };
        assert!(won.is_over());
        assert_eq!(won.winner(), Some(Mark::X));
        assert_eq!(won.winning_line().map(|l| l.indices()), Some([0, 4, 8]));
    }
}
