//! Pure two-player tic-tac-toe game logic.
//!
//! The engine owns no state. A front end holds one [`GameState`], passes it in,
//! and keeps whatever comes back:
//!
//! ```
//! use retro_tictactoe::{play_move, reset_game, Mark, Position};
//!
//! let mut state = reset_game();
//! for position in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleRight,
//!     Position::TopRight,
//! ] {
//!     state = play_move(&state, position);
//! }
//!
//! assert_eq!(state.outcome().winner(), Some(Mark::X));
//! assert_eq!(state.status().to_string(), "Winner: X");
//! ```
//!
//! [`Outcome`] and [`Status`] are derived on every read and never stored, so
//! they cannot drift from the board.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod lines;
mod outcome;
mod position;
mod types;

pub mod invariants;

pub use engine::{compute_outcome, play_index, play_move, reset_game, try_move};
pub use error::{MoveError, ParseError};
pub use lines::{WinLine, WIN_LINES};
pub use outcome::{Outcome, Status};
pub use position::Position;
pub use types::{Board, Cell, GameState, Mark};
