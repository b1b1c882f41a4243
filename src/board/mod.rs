//! Board representation for Reversi

pub mod bitboard;
pub mod board;


use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Disks on the board before the first move
pub const INITIAL_DISKS: usize = 4;

/// Number of placements that fill the board
pub const MAX_MOVES: u32 = (TOTAL_CELLS - INITIAL_DISKS) as u32; // 60

/// Step along a line as (delta row, delta col)
pub type Direction = (i32, i32);

pub const UP: Direction = (-1, 0);
pub const DOWN: Direction = (1, 0);
pub const LEFT: Direction = (0, -1);
pub const RIGHT: Direction = (0, 1);
pub const UP_RIGHT: Direction = (-1, 1);
pub const DOWN_RIGHT: Direction = (1, 1);
pub const DOWN_LEFT: Direction = (1, -1);
pub const UP_LEFT: Direction = (-1, -1);

/// All eight compass directions
pub const DIRECTIONS: [Direction; 8] = [
    UP, DOWN, LEFT, RIGHT, UP_RIGHT, DOWN_RIGHT, DOWN_LEFT, UP_LEFT,
];

/// The four lines through a cell, each as a pair of opposite directions
pub const AXES: [(Direction, Direction); 4] = [
    (UP, DOWN),         // Vertical
    (LEFT, RIGHT),      // Horizontal
    (UP_RIGHT, DOWN_LEFT),
    (DOWN_RIGHT, UP_LEFT),
];

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first; the maximizing side
    Black,
    White,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// +1 for Black, -1 for White. Positive scores favor Black.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("black"),
            Player::White => f.write_str("white"),
        }
    }
}

/// Occupancy of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// Console glyph used by the board dump
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Black => 'x',
            Cell::White => 'o',
        }
    }
}

impl From<Player> for Cell {
    #[inline]
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for untrusted coordinates
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbor one step along `dir`, or None off the board
    #[inline]
    pub fn offset(self, dir: Direction) -> Option<Self> {
        Self::try_new(self.row as i32 + dir.0, self.col as i32 + dir.1)
    }

    /// Every cell in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row,col"`, e.g. `"2,3"`.
impl FromStr for Pos {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPosition {
            input: s.to_string(),
        };
        let (row, col) = s.trim().split_once(',').ok_or_else(invalid)?;
        let row: i32 = row.trim().parse().map_err(|_| invalid())?;
        let col: i32 = col.trim().parse().map_err(|_| invalid())?;
        Pos::try_new(row, col).ok_or_else(invalid)
    }
}
