//! The eight winning lines.

use super::position::Position;
use super::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// Three positions that win when one mark holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// The three positions, in the order listed.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `position` is part of this line.
    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    /// Returns the mark holding all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0.map(|position| board.get(position));
        match a {
            Cell::Marked(mark) if a == b && b == c => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{a}, {b}, {c}]")
    }
}

/// Scan order is significant: rows, then columns, then diagonals. The first
/// owned line wins ties.
pub const WIN_LINES: [WinLine; 8] = {
    use Position::*;
    [
        // Rows
        WinLine::new(TopLeft, TopCenter, TopRight),
        WinLine::new(MiddleLeft, Center, MiddleRight),
        WinLine::new(BottomLeft, BottomCenter, BottomRight),
        // Columns
        WinLine::new(TopLeft, MiddleLeft, BottomLeft),
        WinLine::new(TopCenter, Center, BottomCenter),
        WinLine::new(TopRight, MiddleRight, BottomRight),
        // Diagonals
        WinLine::new(TopLeft, Center, BottomRight),
        WinLine::new(TopRight, Center, BottomLeft),
    ]
};
