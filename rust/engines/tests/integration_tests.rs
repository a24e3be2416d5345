//! Integration tests for the greedy engine
//!
//! These drive full games through the public API of both crates.

use othello_core::{Game, Move, Outcome, Player, NUM_SQUARES};
use othello_engines::{compute_move_greedy, compute_move_scores_greedy, play_out};
use proptest::prelude::*;

#[test]
fn test_greedy_self_play_terminates() {
    let record = play_out(Game::new()).unwrap();

    assert_eq!(record.black + record.white, NUM_SQUARES);
    assert_eq!(record.final_board.empty_count(), 0);
    assert!(record.plies.len() <= NUM_SQUARES - 4);
}

#[test]
fn test_greedy_self_play_is_reproducible() {
    let record = play_out(Game::new()).unwrap();

    assert_eq!(record.plies.len(), 60);
    assert_eq!((record.black, record.white), (19, 45));
    assert_eq!(record.outcome, Outcome::Winner(Player::White));
    // Only the final ply ends the opponent's turn, because the board is full
    let skipped: Vec<usize> = record
        .plies
        .iter()
        .filter(|ply| ply.opponent_skipped)
        .map(|ply| ply.ply)
        .collect();
    assert_eq!(skipped, vec![60]);
    assert_eq!(record.plies[59].player, Player::White);
    assert_eq!(record.plies[59].placed, Move::new(6, 0).unwrap());

    let opening: Vec<(Player, String)> = record.plies[..6]
        .iter()
        .map(|ply| (ply.player, ply.placed.to_string()))
        .collect();
    assert_eq!(
        opening,
        vec![
            (Player::Black, "d3".to_string()),
            (Player::White, "c3".to_string()),
            (Player::Black, "b3".to_string()),
            (Player::White, "b2".to_string()),
            (Player::Black, "b1".to_string()),
            (Player::White, "e3".to_string()),
        ]
    );

    assert_eq!(play_out(Game::new()).unwrap(), record);
}

#[test]
fn test_manual_loop_matches_play_out() {
    let mut game = Game::new();

    while !game.is_game_over() {
        let mv = compute_move_greedy(&game).expect("a running game always has a move");
        assert!(game.get_valid_moves().contains(&mv));
        assert!(game.apply_move(mv.row(), mv.col()).is_ok());
    }

    assert!(game.get_valid_moves().is_empty());
    assert_eq!(compute_move_greedy(&game), None);
    assert_eq!(game.get_board(), play_out(Game::new()).unwrap().final_board);

    let (black, white) = game.get_piece_counts();
    assert_eq!(game.get_winner(), Some(Player::White));
    assert!(white > black);
}

#[test]
fn test_match_record_serializes() {
    let record = play_out(Game::new()).unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["plies"].as_array().map(Vec::len), Some(60));
    assert_eq!(json["plies"][0]["player"], "Black");
    assert_eq!(json["outcome"]["Winner"], "White");
    assert_eq!(json["black"], 19);
}

proptest! {
    /// From any reachable position the greedy move is legal and has the
    /// best gain, and no earlier move ties it
    #[test]
    fn prop_greedy_move_is_first_best(choices in prop::collection::vec(0usize..64, 0..60)) {
        let mut game = Game::new();
        for choice in choices {
            let moves = game.get_valid_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice % moves.len()];
            game.apply_move(mv.row(), mv.col()).unwrap();
        }

        let scores = compute_move_scores_greedy(&game);
        match compute_move_greedy(&game) {
            None => {
                prop_assert!(game.is_game_over());
                prop_assert!(scores.is_empty());
            }
            Some(chosen) => {
                prop_assert!(game.get_valid_moves().contains(&chosen));

                let best = scores.iter().map(|&(_, gain)| gain).max().unwrap();
                let first_best: Move = scores.iter().find(|&&(_, gain)| gain == best).unwrap().0;
                prop_assert_eq!(chosen, first_best);
                // Placed piece plus at least one flip
                prop_assert!(best >= 2);
            }
        }
    }
}
