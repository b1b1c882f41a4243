//! Blocked-disk detection
//!
//! A disk is blocked along a line when neither end of its own-colored run on
//! that line touches an empty cell. Such a disk cannot be captured along that
//! line right now. Used only as an evaluation input.

use crate::board::{Board, Cell, Direction, Pos, AXES};

/// Check whether the disk at `pos` is blocked along all four lines.
///
/// Returns false for an empty cell.
pub fn is_blocked(board: &Board, pos: Pos) -> bool {
    let cell = board.get(pos);
    if cell == Cell::Empty {
        return false;
    }
    AXES
        .iter()
        .all(|&(a, b)| end_blocked(board, pos, cell, a) && end_blocked(board, pos, cell, b))
}

/// Walk over the run of `cell` starting after `pos`; the end is open only if
/// the first different cell is empty. Running off the board counts as blocked.
fn end_blocked(board: &Board, pos: Pos, cell: Cell, dir: Direction) -> bool {
    let mut cursor = pos.offset(dir);
    while let Some(p) = cursor {
        match board.get(p) {
            c if c == cell => cursor = p.offset(dir),
            Cell::Empty => return false,
            _ => return true,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(u8, u8, Cell)]) -> Board {
        let mut board = Board::empty();
        for &(r, c, cell) in cells {
            board.set(Pos::new(r, c), cell);
        }
        board
    }

    #[test]
    fn test_empty_cell_not_blocked() {
        assert!(!is_blocked(&Board::new(), Pos::new(0, 0)));
    }

    #[test]
    fn test_center_disks_not_blocked() {
        let board = Board::new();
        for (r, c) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
            assert!(!is_blocked(&board, Pos::new(r, c)));
        }
    }

    #[test]
    fn test_lone_corner_not_blocked() {
        // Edges bound three lines, but the neighbors are empty
        let board = board_with(&[(0, 0, Cell::Black)]);
        assert!(!is_blocked(&board, Pos::new(0, 0)));
    }

    #[test]
    fn test_full_board_every_disk_blocked() {
        let mut board = Board::empty();
        for pos in Pos::all() {
            let cell = if (pos.row + pos.col) % 2 == 0 {
                Cell::Black
            } else {
                Cell::White
            };
            board.set(pos, cell);
        }
        assert!(Pos::all().all(|p| is_blocked(&board, p)));
    }

    #[test]
    fn test_surrounded_by_opponent_is_blocked() {
        let mut cells = vec![(3, 3, Cell::Black)];
        for (r, c) in [(2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4)] {
            cells.push((r, c, Cell::White));
        }
        let board = board_with(&cells);
        assert!(is_blocked(&board, Pos::new(3, 3)));
        // The ring itself has open ends
        assert!(!is_blocked(&board, Pos::new(2, 2)));
    }

    #[test]
    fn test_own_run_reaching_empty_is_open() {
        // Full first row except the far corner; corner disk's row run ends on empty
        let mut cells: Vec<(u8, u8, Cell)> = (0..7).map(|c| (0, c, Cell::Black)).collect();
        cells.push((1, 0, Cell::White));
        cells.push((1, 1, Cell::White));
        let board = board_with(&cells);
        assert!(!is_blocked(&board, Pos::new(0, 0)));

        cells.push((0, 7, Cell::White));
        let board = board_with(&cells);
        assert!(is_blocked(&board, Pos::new(0, 0)));
    }
}
