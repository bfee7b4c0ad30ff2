//! Screen content derived from a game state.
//!
//! Nothing here is stored. The UI rebuilds these views from the current
//! [`GameState`] on every frame.

use retro_tictactoe::{Board, Cell, GameState, Mark, Position, Status};

/// Heading.
pub const TITLE: &str = "Tic Tac Toe";
/// Line under the heading.
pub const SUBTITLE: &str = "Two-player • same device • retro arcade";
/// Footer tip.
pub const HINT: &str = "Tip: X starts. First to 3 in a row wins.";
/// Label of the reset control.
pub const NEW_GAME: &str = "New Game";

/// How one cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Which cell.
    pub position: Position,
    /// Its content.
    pub cell: Cell,
    /// A move here would be accepted. Unplayable cells are drawn disabled.
    pub playable: bool,
    /// Part of the winning line.
    pub winning: bool,
    /// Under the cursor.
    pub selected: bool,
}

impl CellView {
    /// Text drawn inside the cell.
    pub fn symbol(&self) -> &'static str {
        match self.cell {
            Cell::Empty => " ",
            Cell::Marked(Mark::X) => "X",
            Cell::Marked(Mark::O) => "O",
        }
    }
}

/// Builds the nine cell views in index order.
pub fn cell_views(state: &GameState, cursor: Position) -> [CellView; 9] {
    let winning_line = state.outcome().winning_line();
    Position::ALL.map(|position| CellView {
        position,
        cell: state.board().get(position),
        playable: state.is_cell_playable(position),
        winning: winning_line.is_some_and(|line| line.contains(position)),
        selected: position == cursor,
    })
}

/// Spoken-style description of a cell, numbered from 1.
pub fn cell_label(board: &Board, position: Position) -> String {
    let number = position.to_index() + 1;
    match board.get(position) {
        Cell::Empty => format!("Square {}, empty", number),
        Cell::Marked(mark) => format!("Square {}, {}", number, mark),
    }
}

/// Visual weight of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Game continues.
    Turn,
    /// Somebody won.
    Winner,
    /// Cat's game.
    Draw,
}

impl From<Status> for StatusTone {
    fn from(status: Status) -> Self {
        match status {
            Status::Turn(_) => StatusTone::Turn,
            Status::Winner(_) => StatusTone::Winner,
            Status::Draw => StatusTone::Draw,
        }
    }
}
