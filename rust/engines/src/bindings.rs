/// PyO3 bindings for the Othello engine
/// Exposes the Rust game and the greedy engine to Python
use ndarray::Array2;
use numpy::{PyArray1, PyArray2};
use othello_core::{Game, Move, Outcome, Player, BOARD_SIZE, NUM_SQUARES};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::greedy::compute_move;

/// Returned by `compute_move` when the side to play has no move
const NO_MOVE: u8 = u8::MAX;

/// Python wrapper for an Othello game
#[pyclass]
pub struct OthelloGame {
    game: Game,
}

#[pymethods]
impl OthelloGame {
    /// Create a new game in the standard opening position, Black to move
    #[new]
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Play the current player's piece
    ///
    /// Args:
    ///     action (int): Position on the board (0-63), where action = row * 8 + col
    ///
    /// Returns:
    ///     tuple: (valid, pieces_flipped, game_over)
    ///
    /// Raises:
    ///     ValueError: If action is out of range [0, 63]
    pub fn step(&mut self, action: usize) -> PyResult<(bool, usize, bool)> {
        let mv = Move::from_index(action).ok_or_else(|| {
            PyValueError::new_err(format!(
                "Action {} is out of range. Must be between 0 and {} (inclusive).",
                action,
                NUM_SQUARES - 1
            ))
        })?;

        match self.game.apply_move(mv.row(), mv.col()) {
            Ok(outcome) => Ok((true, outcome.flipped.len(), outcome.game_over)),
            // Rejected moves are reported, not raised
            Err(_) => Ok((false, 0, self.game.is_game_over())),
        }
    }

    /// Board as an (8, 8) uint8 array: 0 = empty, 1 = black, 2 = white
    pub fn get_board<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray2<u8>> {
        let state = self.game.get_state();
        let array = Array2::from_shape_fn((BOARD_SIZE, BOARD_SIZE), |(row, col)| {
            state[row * BOARD_SIZE + col]
        });

        Ok(PyArray2::from_owned_array(py, array))
    }

    /// Valid moves as a (64,) bool mask, index = row * 8 + col
    pub fn get_valid_moves<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<bool>> {
        let mut mask = [false; NUM_SQUARES];
        for mv in self.game.get_valid_moves() {
            mask[mv.index()] = true;
        }
        Ok(PyArray1::from_slice(py, &mask))
    }

    /// 0 for Black, 1 for White
    pub fn get_current_player(&self) -> u8 {
        match self.game.get_current_player() {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    /// (black_count, white_count)
    pub fn get_piece_counts(&self) -> (usize, usize) {
        self.game.get_piece_counts()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// 0 = Black wins, 1 = White wins, 2 = Draw, 3 = Game not finished
    pub fn get_winner(&self) -> u8 {
        match self.game.outcome() {
            Some(Outcome::Winner(Player::Black)) => 0,
            Some(Outcome::Winner(Player::White)) => 1,
            Some(Outcome::Draw) => 2,
            None => 3,
        }
    }

    /// Greedy engine's move (0-63) for the side to play, or 255 if none
    pub fn compute_move(&self) -> u8 {
        compute_move(&self.game).map_or(NO_MOVE, |mv| mv.index() as u8)
    }

    /// Board in the `.`/`B`/`W` text form
    pub fn __str__(&self) -> String {
        self.game.get_board().to_string()
    }
}

/// Python module definition
///
/// This module can be imported in Python as `othello_engines`
#[pymodule]
fn othello_engines(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<OthelloGame>()?;
    Ok(())
}
