//! Tests for move application and time-travel.

use tictactoe_timeline::{
    GameState, GameStatus, GameView, MoveError, Player, Position, SortOrder, Square,
};

#[test]
fn test_top_row_win_scenario() {
    let game = GameState::new()
        .apply_move(0)
        .apply_move(4)
        .apply_move(1)
        .apply_move(7)
        .apply_move(2);

    let status = game.current_status();
    let win = status.win_line().expect("X completed the top row");
    assert_eq!(win.player(), Player::X);
    assert_eq!(win.indices(), [0, 1, 2]);
    assert_eq!(status.to_string(), "Winner: X");
}

#[test]
fn test_draw_scenario() {
    // X O X / X O O / O X X
    let game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("legal game");

    assert_eq!(game.current_status(), GameStatus::Drawn);
    assert_eq!(game.current_status().to_string(), "Draw!");
    assert_eq!(game.current_status().winner(), None);
}

#[test]
fn test_jump_back_then_play_truncates() {
    let game = GameState::replay(&[0, 4, 8]).expect("legal game");
    assert_eq!(game.history().len(), 4);

    let game = game.jump_to(1).apply_move(5);

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current(), 2);
    assert_eq!(game.current_entry().last_move(), Some(Position::MiddleRight));
    assert_eq!(
        game.current_board().get(Position::MiddleRight),
        Square::Occupied(Player::O)
    );
    assert!(game.current_board().is_empty(Position::Center));
}

#[test]
fn test_truncation_law() {
    let full = GameState::replay(&[0, 1, 2, 3, 4]).expect("legal game");
    let len = full.history().len();

    for k in 0..len - 1 {
        let free = Position::valid_moves(full.history()[k].board())[0];
        let game = full.clone().jump_to(k).apply_move(free.to_index());
        assert_eq!(game.history().len(), k + 2);
        assert_eq!(&game.history()[..=k], &full.history()[..=k]);
    }
}

#[test]
fn test_jump_to_current_is_identity() {
    let game = GameState::replay(&[4, 0]).expect("legal game");
    let current = game.current();
    assert_eq!(game.clone().jump_to(current), game);
}

#[test]
fn test_jump_out_of_range_is_noop() {
    let game = GameState::replay(&[4, 0]).expect("legal game");
    assert_eq!(game.clone().jump_to(3), game);
    assert_eq!(game.clone().jump_to(usize::MAX), game);
}

#[test]
fn test_turn_alternation() {
    let mut game = GameState::new();
    for (p, cell) in [4, 0, 8, 2, 6, 1].into_iter().enumerate() {
        let expected = if p % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.to_move(), expected);
        game = game.apply_move(cell);
        assert_eq!(
            game.current_board().get(Position::from_index(cell).unwrap()),
            Square::Occupied(expected)
        );
    }
}

#[test]
fn test_moves_rejected_after_win() {
    let won = GameState::replay(&[0, 4, 1, 7, 2]).expect("legal game");

    for cell in 0..9 {
        assert_eq!(won.clone().apply_move(cell), won);
        assert_eq!(won.try_apply_move(cell), Err(MoveError::GameOver));
    }
}

#[test]
fn test_occupied_square_rejected() {
    let game = GameState::new().apply_move(4);
    assert_eq!(
        game.try_apply_move(4),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(game.clone().apply_move(4), game);
}

#[test]
fn test_travel_out_of_terminal_state_resumes_play() {
    let won = GameState::replay(&[0, 4, 1, 7, 2]).expect("legal game");
    assert!(won.current_status().is_terminal());

    // Back to before X's winning move; O's earlier position is still live.
    let resumed = won.jump_to(4);
    assert_eq!(
        resumed.current_status(),
        GameStatus::InProgress { next: Player::X }
    );

    let resumed = resumed.apply_move(8);
    assert_eq!(resumed.history().len(), 6);
    assert_eq!(resumed.current_status().to_string(), "Next player: O");
}

#[test]
fn test_jump_allowed_forward_again() {
    let game = GameState::replay(&[0, 4, 1]).expect("legal game");
    let game = game.jump_to(0).jump_to(3);
    assert_eq!(game.current(), 3);
    assert_eq!(game.history().len(), 4);
}

#[test]
fn test_describe_moves() {
    let game = GameState::replay(&[4, 2, 6]).expect("legal game");
    assert_eq!(game.describe_move(0).as_deref(), Some("Go to game start"));
    assert_eq!(game.describe_move(1).as_deref(), Some("Go to move #1 (2, 2)"));
    assert_eq!(game.describe_move(2).as_deref(), Some("Go to move #2 (3, 1)"));
    assert_eq!(game.describe_move(3).as_deref(), Some("Go to move #3 (1, 3)"));
    assert_eq!(game.describe_move(4), None);
}

#[test]
fn test_replay_reports_first_rejection() {
    assert_eq!(
        GameState::replay(&[0, 0]),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(GameState::replay(&[0, 12]), Err(MoveError::OutOfBounds(12)));
}

#[test]
fn test_view_lists_history_in_selected_order() {
    let game = GameState::replay(&[0, 4, 1, 7, 2])
        .expect("legal game")
        .toggle_sort_direction();
    assert_eq!(game.sort_order(), SortOrder::Descending);

    let view = GameView::of(&game);
    let indices: Vec<usize> = view.moves().iter().map(|m| *m.index()).collect();
    assert_eq!(indices, vec![5, 4, 3, 2, 1, 0]);
    assert!(*view.moves()[0].is_current());
    assert_eq!(view.moves()[0].description(), "Go to move #5 (3, 1)");
    assert_eq!(view.moves()[5].description(), "Go to game start");
    assert_eq!(view.sort_label(), "Sort Ascending");
    assert_eq!(view.winning_squares(), &vec![0, 1, 2]);
    assert!(view.is_highlighted(Position::TopCenter));
    assert!(!view.is_highlighted(Position::Center));
}

#[test]
fn test_view_serializes_to_json() {
    let view = GameView::of(&GameState::new().apply_move(4));
    let json = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(json["status"], "Next player: O");
    assert_eq!(json["moves"][1]["description"], "Go to move #1 (2, 2)");
    assert_eq!(json["moves"][1]["is_current"], true);
    assert_eq!(json["winning_squares"], serde_json::json!([]));
    assert_eq!(
        json["board"],
        serde_json::json!([null, null, null, null, "X", null, null, null, null])
    );
}

#[test]
fn test_won_view_serializes_winning_cell_indices() {
    let game = GameState::replay(&[0, 4, 1, 7, 2]).expect("legal game");
    let json = serde_json::to_value(GameView::of(&game)).expect("view serializes");

    assert_eq!(json["status"], "Winner: X");
    assert_eq!(json["winning_squares"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["board"][4], "O");
}
