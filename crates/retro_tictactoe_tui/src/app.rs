//! Application state and key handling.

use crate::input::{move_cursor, Action};
use crate::settings::Settings;
use retro_tictactoe::{play_move, reset_game, GameState, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds the single live [`GameState`]. Outcome and status are never cached
/// here; the UI asks the state for them on every frame.
#[derive(Debug)]
pub struct App {
    state: GameState,
    cursor: Position,
    settings: Settings,
    running: bool,
}

impl App {
    /// Creates an app with a fresh game and the cursor in the center.
    pub fn new(settings: Settings) -> Self {
        Self {
            state: reset_game(),
            cursor: Position::Center,
            settings,
            running: true,
        }
    }

    /// Current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// False once the player asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one user action.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(position) => {
                self.cursor = position;
                self.play(position);
            }
            Action::NewGame => self.new_game(),
            Action::Quit => {
                info!("Quit requested");
                self.running = false;
            }
        }
    }

    fn play(&mut self, position: Position) {
        let mark = self.state.next_mark();
        let next = play_move(&self.state, position);
        if next == self.state {
            debug!(%position, "Cell not playable");
            return;
        }

        info!(%mark, %position, "Move played");
        let outcome = next.outcome();
        if outcome.is_over() {
            info!(status = %next.status(), "Game over");
        }
        self.state = next;
    }

    fn new_game(&mut self) {
        info!("New game");
        self.state = reset_game();
        self.cursor = Position::Center;
    }
}
