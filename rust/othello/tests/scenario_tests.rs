//! Concrete game scenarios played through the public API

use othello_core::{Board, Game, Move, MoveError, Outcome, Player, BOARD_SIZE};

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

#[test]
fn test_opening_black_plays_d3() {
    let mut game = Game::new();
    assert_eq!(game.get_valid_moves().len(), 4);
    assert!(game.get_valid_moves().contains(&mv(2, 3)));

    let before = game.get_board();
    assert_eq!(before.get(mv(3, 3)), Some(Player::White));

    game.apply_move(2, 3).unwrap();

    let board = game.get_board();
    assert_eq!(board.get(mv(2, 3)), Some(Player::Black));
    assert_eq!(board.get(mv(3, 3)), Some(Player::Black));
    assert_eq!(game.get_current_player(), Player::White);

    let white_moves = game.get_valid_moves();
    for expected in [mv(2, 2), mv(2, 4), mv(4, 2)] {
        assert!(white_moves.contains(&expected), "missing {}", expected);
    }

    // The snapshot taken before the move is unaffected
    assert_eq!(before, Board::initial());
}

#[test]
fn test_opening_black_plays_c4() {
    let mut game = Game::new();

    assert!(game.apply_move(3, 2).is_ok());
    let board = game.get_board();
    assert_eq!(board.get(mv(3, 2)), Some(Player::Black));
    assert_eq!(board.get(mv(3, 3)), Some(Player::Black));
    assert_eq!(game.get_current_player(), Player::White);
    assert_eq!(game.get_piece_counts(), (4, 1));

    // Rejected move leaves White to play
    assert_eq!(game.apply_move(0, 0), Err(MoveError::NoCaptures(mv(0, 0))));
    assert_eq!(game.get_current_player(), Player::White);
}

#[test]
fn test_out_of_bounds_moves_rejected() {
    let mut game = Game::new();

    for (row, col) in [(BOARD_SIZE, 0), (0, BOARD_SIZE), (BOARD_SIZE, BOARD_SIZE)] {
        assert_eq!(
            game.apply_move(row, col),
            Err(MoveError::OutOfBounds { row, col })
        );
        assert!(!game.is_valid_move(row, col));
    }
    assert_eq!(game, Game::new());
}

#[test]
fn test_column_sequence_then_rejected_move() {
    let mut game = Game::new();

    for (row, col) in [(3, 2), (2, 2), (1, 2), (4, 2), (5, 2)] {
        assert!(game.apply_move(row, col).is_ok(), "({}, {}) rejected", row, col);
    }
    assert_eq!(game.get_current_player(), Player::White);

    // (6, 2) brackets nothing for White here
    assert!(game.apply_move(6, 2).is_err());
    assert_eq!(game.get_current_player(), Player::White);
}

#[test]
fn test_forced_skip_then_game_over() {
    let board: Board = "
        BW......
        ........
        ........
        ........
        ........
        ........
        ........
        BW......
    "
    .parse()
    .unwrap();
    let mut game = Game::from_position(board, Player::Black);

    let first = game.apply_move(0, 2).unwrap();
    assert!(first.opponent_skipped);
    assert_eq!(game.get_current_player(), Player::Black);
    assert!(!game.is_game_over());

    let second = game.apply_move(7, 2).unwrap();
    assert!(second.game_over);
    assert!(game.is_game_over());
    assert!(game.get_valid_moves().is_empty());
    assert_eq!(game.get_piece_counts(), (6, 0));
    assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Black)));

    // Nothing is accepted after the end
    for pos in Move::all() {
        assert!(!game.is_valid_move(pos.row(), pos.col()));
    }
}

#[test]
fn test_edge_moves_accepted_only_when_valid() {
    let mut game = Game::new();

    for i in 0..BOARD_SIZE {
        for (row, col) in [(0, i), (BOARD_SIZE - 1, i), (i, 0), (i, BOARD_SIZE - 1)] {
            if game.is_valid_move(row, col) {
                assert!(game.apply_move(row, col).is_ok());
            } else {
                assert!(game.apply_move(row, col).is_err());
            }
        }
    }

    // No edge square is playable from the opening
    assert_eq!(game, Game::new());
}

#[test]
fn test_board_serializes_as_nested_rows() {
    let board = Game::new().get_board();
    let json = serde_json::to_value(board).unwrap();

    assert_eq!(json["cells"][3][3], "White");
    assert_eq!(json["cells"][3][4], "Black");
    assert!(json["cells"][0][0].is_null());

    let back: Board = serde_json::from_value(json).unwrap();
    assert_eq!(back, board);
}
