//! Flip rules for Reversi
//!
//! A placement captures every straight run of opponent disks that starts
//! next to the placed disk and ends on one of the mover's own disks.
//! A placement is legal only if it captures at least one run.

use crate::board::{Board, Cell, Direction, Player, Pos, DIRECTIONS};

/// Count opponent disks captured along one direction.
///
/// Walks from `pos` (exclusive) along `dir` over consecutive opponent disks.
/// Returns the run length only when the cell right after the run is on the
/// board and holds `player`'s own disk; otherwise 0. Never mutates.
///
/// # Arguments
/// * `board` - Current board state
/// * `player` - Player who would place at `pos`
/// * `dir` - Direction to walk
/// * `pos` - Target cell of the placement
pub fn count_flips(board: &Board, player: Player, dir: Direction, pos: Pos) -> u32 {
    let own = Cell::from(player);
    let opponent = Cell::from(player.opponent());

    let mut count = 0;
    let mut cursor = pos.offset(dir);
    while let Some(p) = cursor {
        if board.get(p) != opponent {
            break;
        }
        count += 1;
        cursor = p.offset(dir);
    }

    match cursor {
        Some(p) if board.get(p) == own => count,
        _ => 0,
    }
}

/// Total disks captured by placing at `pos`, over all 8 directions.
///
/// Returns 0 for an occupied cell. A positive result means the move is legal.
#[inline]
pub fn total_flips(board: &Board, player: Player, pos: Pos) -> u32 {
    if !board.is_empty(pos) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&dir| count_flips(board, player, dir, pos))
        .sum()
}

/// Execute the capture along one direction.
///
/// No-op returning false when nothing is captured that way. Otherwise writes
/// `player` at `pos` and over the whole captured run, stopping at the first
/// cell already owned by `player`, and returns true.
pub fn apply_direction(board: &mut Board, player: Player, dir: Direction, pos: Pos) -> bool {
    if count_flips(board, player, dir, pos) == 0 {
        return false;
    }

    let own = Cell::from(player);
    board.set(pos, own);

    // count_flips guarantees the run ends on an own disk inside the board
    let mut cursor = pos.offset(dir);
    while let Some(p) = cursor {
        if board.get(p) == own {
            break;
        }
        board.set(p, own);
        cursor = p.offset(dir);
    }

    true
}

/// Place a disk for `player` at `pos`, flipping every captured run.
///
/// Returns false and leaves the board untouched if `pos` is occupied or no
/// direction captures anything.
///
/// Every direction is evaluated (no short-circuit), and each one measures
/// its run against the board as left by the previous directions. The target
/// cell is only written by a direction that captures.
pub fn place(board: &mut Board, player: Player, pos: Pos) -> bool {
    if !board.is_empty(pos) {
        return false;
    }

    let mut placed = false;
    for &dir in &DIRECTIONS {
        placed |= apply_direction(board, player, dir, pos);
    }
    placed
}

/// Check whether `player` has any legal placement on the board.
#[inline]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Pos::all().any(|pos| total_flips(board, player, pos) > 0)
}
