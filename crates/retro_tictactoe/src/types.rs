//! Core domain types for tic-tac-toe.

use super::error::ParseError;
use super::invariants::{describe, GameInvariants, InvariantSet};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A player's symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// Always moves first.
    #[default]
    #[display("X")]
    X,
    /// Moves second.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Claimed by a mark. Never changes afterwards.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// 3x3 board, cells in row-major order (0-8).
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `position`.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns true once every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Counts the cells claimed by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// Returns the empty positions in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter()
            .filter(|position| self.get(*position).is_empty())
            .collect()
    }

    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.to_index()] = cell;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the [`Display`](std::fmt::Display) form: nine cells of `X`, `O` or
/// `.`, with whitespace and `|` ignored.
impl FromStr for Board {
    type Err = ParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut filled = 0;

        for character in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match character {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '_' | '-' => Cell::Empty,
                other => {
                    return Err(ParseError::InvalidCharacter {
                        character: other,
                        index: filled,
                    });
                }
            };
            if filled < 9 {
                board.cells[filled] = cell;
            }
            filled += 1;
        }

        if filled != 9 {
            return Err(ParseError::WrongCellCount(filled));
        }
        Ok(board)
    }
}

/// Complete game state: the board plus whose turn it is.
///
/// `next_mark` is `X` exactly when both marks appear equally often. Every
/// public constructor upholds this; there is no way to set `next_mark`
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "StateRepr")]
pub struct GameState {
    board: Board,
    next_mark: Mark,
}

impl GameState {
    /// Creates the canonical empty state, X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from a board. X moves when both marks appear equally
    /// often, O otherwise.
    ///
    /// Any board is accepted; use [`GameInvariants`] to ask whether it could
    /// have come from legal play.
    #[instrument]
    pub fn from_board(board: Board) -> Self {
        let next_mark = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        Self { board, next_mark }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Number of moves played so far.
    pub fn move_count(&self) -> usize {
        self.board.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Places `next_mark` at `position` and hands the turn over. Legality is
    /// the caller's job.
    pub(crate) fn place(&mut self, position: Position) {
        self.board.set(position, Cell::Marked(self.next_mark));
        self.next_mark = self.next_mark.opponent();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl FromStr for GameState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_board(s.parse()?))
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}

/// Wire shape of [`GameState`]. Only states legal play can reach are
/// accepted.
#[derive(Deserialize)]
struct StateRepr {
    board: Board,
    next_mark: Mark,
}

impl TryFrom<StateRepr> for GameState {
    type Error = ParseError;

    fn try_from(repr: StateRepr) -> Result<Self, Self::Error> {
        let state = GameState::from_board(repr.board);
        if state.next_mark != repr.next_mark {
            return Err(ParseError::WrongTurn(repr.next_mark));
        }
        GameInvariants::check_all(&state)
            .map_err(|violations| ParseError::Unreachable(describe(&violations)))?;
        Ok(state)
    }
}
