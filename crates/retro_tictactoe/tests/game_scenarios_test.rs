//! End-to-end game scenarios through the public engine API.

use retro_tictactoe::{
    compute_outcome, play_index, play_move, reset_game, Cell, GameState, Mark, Outcome, Position,
    Status,
};

fn play_indices(indices: &[usize]) -> GameState {
    indices
        .iter()
        .fold(reset_game(), |state, index| play_index(&state, *index))
}

#[test]
fn test_top_row_win() {
    let state = play_indices(&[0, 4, 1, 5, 2]);

    match compute_outcome(&state) {
        Outcome::Won { mark, line } => {
            assert_eq!(mark, Mark::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("Expected X to win, got {:?}", other),
    }
    assert_eq!(state.status(), Status::Winner(Mark::X));
}

#[test]
fn test_full_board_draw() {
    // X O X / O X O / O X O: nobody holds a line. Four X against five O is
    // not a reachable count, but the outcome only looks at lines and fullness.
    let state: GameState = "XOX|OXO|OXO".parse().expect("Valid board");
    assert_eq!(compute_outcome(&state), Outcome::Draw);
    assert_eq!(state.status().to_string(), "Draw: Cat's game");
}

#[test]
fn test_draw_reached_by_play() {
    // X:0 O:1 X:2 O:4 X:3 O:5 X:7 O:6 X:8
    let state = play_indices(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.to_string(), "XOX\nXOO\nOXX");
    assert_eq!(state.outcome(), Outcome::Draw);
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let state = play_indices(&[4]);
    let again = play_move(&state, Position::Center);

    assert_eq!(again, state);
    assert_eq!(again.board().count(Mark::X), 1);
    assert_eq!(again.board().count(Mark::O), 0);
    assert_eq!(again.next_mark(), Mark::O);
}

#[test]
fn test_move_after_win_leaves_state_unchanged() {
    let won = play_indices(&[0, 4, 1, 5, 2]);
    assert!(won.outcome().is_over());

    let after = play_index(&won, 8);
    assert_eq!(after, won);
    assert_eq!(after.board().get(Position::BottomRight), Cell::Empty);
}

#[test]
fn test_reset_gives_fresh_game() {
    let fresh = reset_game();
    assert_eq!(fresh, GameState::new());
    assert!(fresh.board().cells().iter().all(|cell| *cell == Cell::Empty));
    assert_eq!(fresh.next_mark(), Mark::X);
    assert_eq!(fresh.status().to_string(), "Turn: X");
}

#[test]
fn test_status_follows_turns() {
    let state = play_indices(&[4]);
    assert_eq!(state.status().to_string(), "Turn: O");

    let state = play_index(&state, 0);
    assert_eq!(state.status().to_string(), "Turn: X");
}

#[test]
fn test_o_can_win_on_diagonal() {
    // X:0 O:2 X:1 O:4 X:8 O:6
    let state = play_indices(&[0, 2, 1, 4, 8, 6]);
    assert_eq!(
        state.outcome().winning_line().map(|line| line.indices()),
        Some([2, 4, 6])
    );
    assert_eq!(state.status().to_string(), "Winner: O");
}

#[test]
fn test_state_json_round_trip() {
    let state = play_indices(&[4, 0, 8]);
    let json = serde_json::to_string(&state).expect("Serializes");
    let back: GameState = serde_json::from_str(&json).expect("Deserializes");
    assert_eq!(back, state);
}
