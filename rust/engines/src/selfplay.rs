//! Play the greedy engine against itself until neither side can move.

use othello_core::{Board, Game, Move, MoveError, Outcome, Player};
use serde::Serialize;
use tracing::{info, instrument};

use crate::greedy::compute_move;

#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error("engine rejected selected move {mv} at ply {ply}: {source}")]
    Rejected {
        ply: usize,
        mv: Move,
        source: MoveError,
    },

    #[error("{0} has no move but the game is not over")]
    Stalled(Player),
}

/// One applied move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlyRecord {
    pub ply: usize,
    pub player: Player,
    pub placed: Move,
    pub flipped: usize,
    pub opponent_skipped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub plies: Vec<PlyRecord>,
    pub black: usize,
    pub white: usize,
    pub outcome: Outcome,
    pub final_board: Board,
}

/// Let the greedy engine pick every move, for whichever side is to play,
/// until the game is over.
///
/// Every ply fills one empty square, so this ends after at most 60 plies.
#[instrument(level = "debug", skip(game))]
pub fn play_out(mut game: Game) -> Result<MatchRecord, SelfPlayError> {
    let mut plies = Vec::new();

    let outcome = loop {
        if let Some(outcome) = game.outcome() {
            break outcome;
        }

        let player = game.get_current_player();
        let mv = compute_move(&game).ok_or(SelfPlayError::Stalled(player))?;
        let applied = game
            .apply_move(mv.row(), mv.col())
            .map_err(|source| SelfPlayError::Rejected {
                ply: plies.len() + 1,
                mv,
                source,
            })?;

        plies.push(PlyRecord {
            ply: plies.len() + 1,
            player,
            placed: applied.placed,
            flipped: applied.flipped.len(),
            opponent_skipped: applied.opponent_skipped,
        });
    };

    let (black, white) = game.get_piece_counts();
    info!(plies = plies.len(), black, white, ?outcome, "self-play finished");

    Ok(MatchRecord {
        plies,
        black,
        white,
        outcome,
        final_board: game.get_board(),
    })
}
