//! Terminal front end for `retro_tictactoe`.
//!
//! # Architecture
//!
//! - **App**: owns the one live `GameState` and applies key actions to it
//! - **View**: per-frame cell views, labels and status derived from the state
//! - **UI**: ratatui rendering of those views
//! - **Replay**: headless move-list evaluation for scripts and checks

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod logging;
mod replay;
mod settings;
mod tui;
mod ui;
mod view;

pub use app::App;
pub use cli::{Cli, Command};
pub use input::{action_for, move_cursor, Action, Direction};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{replay, ReplayReport};
pub use settings::{ConfigError, DisplaySettings, LoggingSettings, Settings, DEFAULT_SETTINGS_PATH};
pub use tui::run_tui;
pub use ui::draw;
pub use view::{cell_label, cell_views, CellView, StatusTone, HINT, NEW_GAME, SUBTITLE, TITLE};
