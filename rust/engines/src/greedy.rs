//! Greedy Engine - one-ply piece maximiser
//!
//! Algorithm Strategy:
//! - For each legal move, play it on a clone of the game
//! - Score the move by the mover's piece count afterwards minus the mover's
//!   piece count before
//! - Select the move with the highest gain
//! - Break ties by choosing the first move in row-major order
//!
//! There is no lookahead. The real game is only read, never changed.

use othello_core::{Game, Move};
use tracing::{debug, instrument, trace, warn};

/// Choose a move for the side to play.
///
/// Returns `None` when the side to play has no legal move, which only
/// happens once the game is over.
#[instrument(level = "debug", skip(game), fields(player = %game.get_current_player()))]
pub fn compute_move(game: &Game) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;

    for (mv, gain) in compute_move_scores(game) {
        // Strictly greater keeps the earliest move on ties
        if best.map_or(true, |(_, best_gain)| gain > best_gain) {
            best = Some((mv, gain));
        }
    }

    if let Some((mv, gain)) = best {
        debug!(%mv, gain, "greedy move selected");
    }
    best.map(|(mv, _)| mv)
}

/// Gain of every legal move, in valid-move order
pub fn compute_move_scores(game: &Game) -> Vec<(Move, i32)> {
    let mover = game.get_current_player();
    let before = game.get_board().count(mover) as i32;

    game.get_valid_moves()
        .into_iter()
        .filter_map(|mv| {
            let mut simulated = game.clone();
            match simulated.apply_move(mv.row(), mv.col()) {
                Ok(_) => {
                    let gain = simulated.get_board().count(mover) as i32 - before;
                    trace!(%mv, gain, "candidate");
                    Some((mv, gain))
                }
                Err(err) => {
                    warn!(%mv, %err, "listed move rejected on a clone");
                    None
                }
            }
        })
        .collect()
}
