use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseBoardError;
use crate::player::Player;

/// Side length of the board
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a square, `None` when empty
pub type Cell = Option<Player>;

/// An on-board coordinate, 0-indexed from the top-left corner.
///
/// A `Move` can only be built through [`Move::new`] or [`Move::from_index`],
/// so holding one means the coordinate is inside the board. Ordering is
/// row-major.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Returns `None` if (row, col) is off the board
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Move { row, col })
        } else {
            None
        }
    }

    /// Inverse of [`Move::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Move::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Flat index: `row * 8 + col`
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Every square in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..NUM_SQUARES).filter_map(Move::from_index)
    }

    /// The neighbouring square in `dir`, if it is on the board
    pub fn step(self, dir: Direction) -> Option<Move> {
        let row = self.row.checked_add_signed(dir.dr)?;
        let col = self.col.checked_add_signed(dir.dc)?;
        Move::new(row, col)
    }
}

/// Algebraic notation: column letter then 1-based row, so (2, 3) is `d3`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col as u8);
        write!(f, "{}{}", file, self.row + 1)
    }
}

/// A compass unit vector
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Direction {
    pub dr: isize,
    pub dc: isize,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction { dr: -1, dc: -1 },
        Direction { dr: -1, dc: 0 },
        Direction { dr: -1, dc: 1 },
        Direction { dr: 0, dc: -1 },
        Direction { dr: 0, dc: 1 },
        Direction { dr: 1, dc: -1 },
        Direction { dr: 1, dc: 0 },
        Direction { dr: 1, dc: 1 },
    ];
}

/// An 8x8 grid of cells.
///
/// `Board` is `Copy`: every board handed out by the engine is an independent
/// snapshot, and the only way to change a board inside the engine is through
/// a successful move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard opening position:
    /// - (3,3) and (4,4) are White
    /// - (3,4) and (4,3) are Black
    pub fn initial() -> Self {
        let mut board = Board::empty();
        let center = BOARD_SIZE / 2;

        board.cells[center - 1][center - 1] = Some(Player::White);
        board.cells[center - 1][center] = Some(Player::Black);
        board.cells[center][center - 1] = Some(Player::Black);
        board.cells[center][center] = Some(Player::White);

        board
    }

    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Number of squares held by `player`
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_none()).count()
    }

    /// Opponent pieces `mover` would flip along `dir` by playing at `mv`.
    ///
    /// The scan walks away from `mv` collecting opponent pieces. The run only
    /// counts when it is closed by one of the mover's own pieces; running off
    /// the board or into an empty square yields nothing.
    pub fn flips_in_direction(&self, mv: Move, dir: Direction, mover: Player) -> Vec<Move> {
        let mut flipped = Vec::new();
        let mut current = mv.step(dir);

        while let Some(pos) = current {
            match self.get(pos) {
                None => break,
                Some(owner) if owner == mover => return flipped,
                Some(_) => {
                    flipped.push(pos);
                    current = pos.step(dir);
                }
            }
        }

        Vec::new()
    }

    /// Union of the flips in all 8 directions. Empty for an occupied square.
    pub fn flips(&self, mv: Move, mover: Player) -> Vec<Move> {
        if self.get(mv).is_some() {
            return Vec::new();
        }

        Direction::ALL
            .iter()
            .flat_map(|&dir| self.flips_in_direction(mv, dir, mover))
            .collect()
    }

    /// A move is valid if the square is empty and at least one direction
    /// flips something
    pub fn is_valid_move(&self, mv: Move, mover: Player) -> bool {
        self.get(mv).is_none()
            && Direction::ALL
                .iter()
                .any(|&dir| !self.flips_in_direction(mv, dir, mover).is_empty())
    }

    /// All valid moves for `mover`, row-major
    pub fn valid_moves_for(&self, mover: Player) -> Vec<Move> {
        Move::all()
            .filter(|&mv| self.is_valid_move(mv, mover))
            .collect()
    }

    pub fn has_valid_move(&self, mover: Player) -> bool {
        Move::all().any(|mv| self.is_valid_move(mv, mover))
    }

    /// Flat board as [0=empty, 1=black, 2=white], indexed by `row * 8 + col`
    pub fn to_codes(&self) -> [u8; NUM_SQUARES] {
        let mut codes = [0u8; NUM_SQUARES];

        for mv in Move::all() {
            codes[mv.index()] = match self.get(mv) {
                None => 0,
                Some(Player::Black) => 1,
                Some(Player::White) => 2,
            };
        }

        codes
    }

    /// Put `mover` on `mv` and turn every square in `flipped` to `mover`
    pub(crate) fn place(&mut self, mv: Move, mover: Player, flipped: &[Move]) {
        self.cells[mv.row][mv.col] = Some(mover);
        for pos in flipped {
            self.cells[pos.row][pos.col] = Some(mover);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// One line per row, `.` for empty, `B` for Black, `W` for White
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let symbol = match cell {
                    None => '.',
                    Some(Player::Black) => 'B',
                    Some(Player::White) => 'W',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) form. `X`/`O` are accepted for
/// Black/White, blank lines and whitespace between squares are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();

        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: symbols.len(),
                });
            }

            for (col, &symbol) in symbols.iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' => None,
                    'B' | 'X' => Some(Player::Black),
                    'W' | 'O' => Some(Player::White),
                    _ => return Err(ParseBoardError::UnknownSymbol { row, col, symbol }),
                };
            }
        }

        Ok(board)
    }
}
