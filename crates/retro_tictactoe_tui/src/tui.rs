//! Terminal setup and the event loop.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

use crate::app::App;
use crate::input::action_for;
use crate::settings::Settings;
use crate::ui;

/// Raw mode and the alternate screen, undone on drop.
///
/// Dropping runs every teardown step even if an earlier one fails, so the
/// terminal comes back on early returns from `?` as well as on the normal path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on the guard owns cleanup, including a failed screen switch.
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best-effort restore. Each step runs regardless of the others.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Chains a restore in front of the current panic hook so the panic message
/// lands on a usable terminal.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// Runs the game until the player quits. The terminal is restored on every
/// exit path, panics included.
#[instrument(skip_all)]
pub fn run_tui(settings: Settings) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(settings));

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match action_for(key.code) {
                Some(action) => app.handle(action),
                None => debug!(code = ?key.code, "Unbound key"),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_tty_does_not_panic() {
        // No raw mode was entered; every step must still run and return.
        restore_terminal();
    }

    #[test]
    fn test_guard_drop_does_not_panic() {
        drop(TerminalGuard);
    }
}
