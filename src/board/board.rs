//! Board structure: cell occupancy for both players

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Pos, BOARD_SIZE};

/// 8x8 Reversi board.
///
/// `Copy` on purpose: search branches take their own snapshot of the board
/// instead of undoing moves in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black disks bitboard
    pub black: Bitboard,
    /// White disks bitboard
    pub white: Bitboard,
}

impl Board {
    /// Board with the four starting disks in the center
    pub fn new() -> Self {
        let mut board = Self::empty();
        let center = (BOARD_SIZE / 2) as u8;
        board.set(Pos::new(center - 1, center - 1), Cell::White);
        board.set(Pos::new(center, center), Cell::White);
        board.set(Pos::new(center - 1, center), Cell::Black);
        board.set(Pos::new(center, center - 1), Cell::Black);
        board
    }

    /// Board with no disks at all (for setting up test positions)
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Overwrite a cell
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        match cell {
            Cell::Black => {
                self.white.clear(pos);
                self.black.set(pos);
            }
            Cell::White => {
                self.black.clear(pos);
                self.white.set(pos);
            }
            Cell::Empty => {
                self.black.clear(pos);
                self.white.clear(pos);
            }
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Disk totals as (black, white)
    #[inline]
    pub fn count_disks(&self) -> (u32, u32) {
        (self.black.count(), self.white.count())
    }

    /// Board dump with row and column indices
    pub fn render_with_coords(&self) -> String {
        let mut out = String::from("  ");
        for c in 0..BOARD_SIZE {
            out.push_str(&format!(" {c}"));
        }
        out.push('\n');
        for r in 0..BOARD_SIZE {
            out.push_str(&format!("{r} "));
            for c in 0..BOARD_SIZE {
                out.push(' ');
                out.push(self.get(Pos::new(r as u8, c as u8)).glyph());
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One glyph per cell, space separated, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(Pos::new(r as u8, c as u8)).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
