use crate::board::Move;

/// Reasons a move is rejected. The engine state is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("{0} is already occupied")]
    Occupied(Move),

    #[error("{0} does not capture anything")]
    NoCaptures(Move),
}

/// Errors from parsing the text form of a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} squares, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("unknown symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}
