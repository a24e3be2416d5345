//! Core types and game logic for Othello (Reversi)
//!
//! - [`board`] — the 8x8 grid, coordinates, directions and the capture scan
//! - [`game`] — the engine: turn order, forced skips, game end, winner
//! - [`player`] — the two sides
//! - [`error`] — rejected moves and board parsing errors
//!
//! ```
//! use othello_core::{Game, Player};
//!
//! let mut game = Game::new();
//! let outcome = game.apply_move(2, 3).unwrap();
//! assert_eq!(outcome.flipped.len(), 1);
//! assert_eq!(game.get_current_player(), Player::White);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod player;

pub use board::{Board, Cell, Direction, Move, BOARD_SIZE, NUM_SQUARES};
pub use error::{MoveError, ParseBoardError};
pub use game::{Game, MoveOutcome, Outcome};
pub use player::Player;
