use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::board::{Board, Move, NUM_SQUARES};
use crate::error::MoveError;
use crate::player::Player;

/// Final result of a finished game
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// What a successful [`Game::apply_move`] did
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct MoveOutcome {
    pub player: Player,
    pub placed: Move,
    /// Squares turned to `player`, grouped by direction in [`Direction::ALL`](crate::Direction::ALL) order
    pub flipped: Vec<Move>,
    /// Whose turn it is now
    pub next_player: Player,
    /// The opponent had no legal move and lost the turn
    pub opponent_skipped: bool,
    pub game_over: bool,
}

/// The Othello game engine.
///
/// Owns the board, the side to move and the legal moves for that side. The
/// legal-move list is recomputed inside every successful
/// [`apply_move`](Game::apply_move), so it always matches the board and the
/// current player when seen from outside. Queries hand out copies.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    board: Board,
    current_player: Player,
    valid_moves: Vec<Move>,
}

impl Game {
    /// Create a game in the standard opening position with Black to move
    pub fn new() -> Self {
        Self::from_position(Board::initial(), Player::Black)
    }

    /// Start from an arbitrary position.
    ///
    /// If `to_move` has no legal move but the opponent does, the opponent
    /// moves first, so a game that is not over always has legal moves.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut game = Game {
            board,
            current_player: to_move,
            valid_moves: Vec::new(),
        };
        game.refresh_valid_moves();

        if game.valid_moves.is_empty() && game.board.has_valid_move(to_move.opponent()) {
            debug!(player = %to_move, "no legal moves in starting position, opponent moves first");
            game.switch_player();
            game.refresh_valid_moves();
        }

        game
    }

    /// Copy of the board
    pub fn get_board(&self) -> Board {
        self.board
    }

    /// Flat board as [0=empty, 1=black, 2=white], indexed by `row * 8 + col`
    pub fn get_state(&self) -> [u8; NUM_SQUARES] {
        self.board.to_codes()
    }

    pub fn get_current_player(&self) -> Player {
        self.current_player
    }

    /// Legal moves for the current player, row-major
    pub fn get_valid_moves(&self) -> Vec<Move> {
        self.valid_moves.clone()
    }

    /// Piece counts (black_count, white_count)
    pub fn get_piece_counts(&self) -> (usize, usize) {
        (
            self.board.count(Player::Black),
            self.board.count(Player::White),
        )
    }

    /// Check if the current player may play at (row, col)
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.check_move(row, col).is_ok()
    }

    /// Like [`is_valid_move`](Game::is_valid_move), but says why a move is
    /// rejected
    pub fn check_move(&self, row: usize, col: usize) -> Result<Move, MoveError> {
        let mv = Move::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;

        if self.board.get(mv).is_some() {
            return Err(MoveError::Occupied(mv));
        }
        if !self.board.is_valid_move(mv, self.current_player) {
            return Err(MoveError::NoCaptures(mv));
        }

        Ok(mv)
    }

    /// Play the current player's piece at (row, col).
    ///
    /// On success the piece is placed, every bracketed opponent piece is
    /// flipped and the turn passes to the opponent. If the opponent then has
    /// no legal move the turn comes straight back. If neither side can move
    /// the game is over and the current player stays the one who just moved.
    ///
    /// An illegal move changes nothing and returns the reason.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let mv = self.check_move(row, col).map_err(|err| {
            debug!(%err, "move rejected");
            err
        })?;

        let player = self.current_player;
        let flipped = self.board.flips(mv, player);
        self.board.place(mv, player, &flipped);

        self.switch_player();
        self.refresh_valid_moves();

        let mut opponent_skipped = false;
        if self.valid_moves.is_empty() {
            opponent_skipped = true;
            self.switch_player();
            self.refresh_valid_moves();

            if self.valid_moves.is_empty() {
                debug!("neither side can move, game over");
            } else {
                debug!(skipped = %player.opponent(), "no legal moves, turn passes back");
            }
        }

        Ok(MoveOutcome {
            player,
            placed: mv,
            flipped,
            next_player: self.current_player,
            opponent_skipped,
            game_over: self.valid_moves.is_empty(),
        })
    }

    /// Check if the game is over
    ///
    /// The game is over when the current player has no legal move and the
    /// opponent would have none either. The opponent check reads the board
    /// directly, so asking never changes the game.
    pub fn is_game_over(&self) -> bool {
        self.valid_moves.is_empty() && !self.board.has_valid_move(self.current_player.opponent())
    }

    /// `None` while the game is running
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            return None;
        }

        let (black, white) = self.get_piece_counts();
        let outcome = if black > white {
            Outcome::Winner(Player::Black)
        } else if white > black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Draw
        };
        Some(outcome)
    }

    /// Get the winner of the game
    /// Returns Some(Player) if there's a winner, None if it's a draw or game is not over
    pub fn get_winner(&self) -> Option<Player> {
        match self.outcome() {
            Some(Outcome::Winner(player)) => Some(player),
            Some(Outcome::Draw) | None => None,
        }
    }

    fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    fn refresh_valid_moves(&mut self) {
        self.valid_moves = self.board.valid_moves_for(self.current_player);
        trace!(player = %self.current_player, count = self.valid_moves.len(), "valid moves");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
