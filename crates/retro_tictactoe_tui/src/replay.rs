//! Headless replay of a move list.

use retro_tictactoe::{play_index, reset_game, GameState, Outcome};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Result of replaying a move list from an empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Final state.
    pub state: GameState,
    /// Outcome of the final state.
    pub outcome: Outcome,
    /// Status line of the final state.
    pub status: String,
    /// Indices that were ignored, in the order given.
    pub ignored: Vec<usize>,
}

impl ReplayReport {
    /// Board followed by the status line, plus any ignored moves.
    pub fn render_text(&self) -> String {
        let mut text = format!("{}\n{}", self.state.board(), self.status);
        if !self.ignored.is_empty() {
            let ignored = self
                .ignored
                .iter()
                .map(|index| index.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            text.push_str(&format!("\nIgnored moves: {}", ignored));
        }
        text
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Plays `moves` (0-based cell indices) in order from an empty board.
///
/// Moves the engine refuses are recorded and skipped; they never stop the
/// replay.
#[instrument]
pub fn replay(moves: &[usize]) -> ReplayReport {
    let mut state = reset_game();
    let mut ignored = Vec::new();

    for &index in moves {
        let next = play_index(&state, index);
        if next == state {
            warn!(index, status = %state.status(), "Move ignored during replay");
            ignored.push(index);
        }
        state = next;
    }

    let outcome = state.outcome();
    let status = state.status().to_string();
    info!(moves = moves.len(), ignored = ignored.len(), %status, "Replay finished");

    ReplayReport {
        state,
        outcome,
        status,
        ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retro_tictactoe::Mark;

    #[test]
    fn test_replay_win() {
        let report = replay(&[0, 4, 1, 5, 2]);
        assert_eq!(report.outcome.winner(), Some(Mark::X));
        assert_eq!(report.render_text(), "XXX\n.OO\n...\nWinner: X");
    }

    #[test]
    fn test_replay_reports_ignored_moves() {
        let report = replay(&[4, 4, 12, 0]);
        assert_eq!(report.ignored, vec![4, 12]);
        assert_eq!(report.state.move_count(), 2);
        assert!(report.render_text().ends_with("Ignored moves: 4, 12"));
    }

    #[test]
    fn test_empty_replay() {
        let report = replay(&[]);
        assert_eq!(report.state, GameState::new());
        assert_eq!(report.render_text(), "...\n...\n...\nTurn: X");
    }
}
