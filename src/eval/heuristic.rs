//! Heuristic evaluation function for Reversi positions
//!
//! This module provides the evaluation used at the search depth cutoff.
//! It evaluates board positions based on:
//! - Disk difference
//! - Blocked disks (counted a second time)
//! - Average disks flipped per legal move, for each side
//!
//! Scores are always from Black's point of view: positive favors Black,
//! matching the sign of [`crate::GameSession::utility`].

use crate::board::{Board, Player, Pos};
use crate::rules::{is_blocked, total_flips};

use super::weights::HeuristicWeights;

/// Evaluate the board with the default weights.
///
/// # Returns
/// A score that stays within [-1, 1] for any reachable non-terminal position
#[must_use]
pub fn heuristic(board: &Board) -> f64 {
    heuristic_with(board, &HeuristicWeights::DEFAULT)
}

/// Evaluate the board with explicit weights.
#[must_use]
pub fn heuristic_with(board: &Board, weights: &HeuristicWeights) -> f64 {
    let mut material = 0i32;
    let mut blocked = 0i32;

    for pos in Pos::all() {
        let Some(player) = board.get(pos).player() else {
            continue;
        };
        material += player.sign();
        if is_blocked(board, pos) {
            blocked += player.sign();
        }
    }

    let score = weights.disk * f64::from(material)
        + weights.blocked * f64::from(blocked)
        + weights.mobility * average_move_quality(board);
    score / weights.normalizer
}

/// Mean flips per legal move for Black minus the same for White.
///
/// Computed for both sides regardless of whose turn it is. A side without
/// legal moves averages 0.
#[must_use]
pub fn average_move_quality(board: &Board) -> f64 {
    mean_flips(board, Player::Black) - mean_flips(board, Player::White)
}

/// Average `total_flips` over the player's legal placements
fn mean_flips(board: &Board, player: Player) -> f64 {
    let (moves, flips) = Pos::all()
        .map(|pos| total_flips(board, player, pos))
        .filter(|&n| n > 0)
        .fold((0u32, 0u32), |(moves, flips), n| (moves + 1, flips + n));

    f64::from(flips) / f64::from(moves.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn board_with(cells: &[(u8, u8, Cell)]) -> Board {
        let mut board = Board::empty();
        for &(r, c, cell) in cells {
            board.set(Pos::new(r, c), cell);
        }
        board
    }

    #[test]
    fn test_initial_position_is_balanced() {
        let board = Board::new();
        assert_eq!(average_move_quality(&board), 0.0);
        assert_eq!(heuristic(&board), 0.0);
    }

    #[test]
    fn test_heuristic_symmetric_under_color_swap() {
        let board = board_with(&[
            (0, 0, Cell::Black),
            (0, 1, Cell::White),
            (2, 2, Cell::Black),
            (2, 3, Cell::Black),
            (3, 3, Cell::White),
        ]);
        let mut swapped = Board::empty();
        for pos in Pos::all() {
            let cell = match board.get(pos) {
                Cell::Black => Cell::White,
                Cell::White => Cell::Black,
                Cell::Empty => Cell::Empty,
            };
            swapped.set(pos, cell);
        }
        assert_eq!(heuristic(&board), -heuristic(&swapped));
    }

    #[test]
    fn test_average_move_quality_no_moves_is_zero() {
        let board = board_with(&[(0, 0, Cell::Black)]);
        assert_eq!(average_move_quality(&board), 0.0);
    }

    #[test]
    fn test_average_move_quality_one_sided() {
        // Black: (0,3) flips two. White has no capture on this board.
        let board = board_with(&[
            (0, 0, Cell::Black),
            (0, 1, Cell::White),
            (0, 2, Cell::White),
        ]);
        assert_eq!(average_move_quality(&board), 2.0);
    }

    #[test]
    fn test_heuristic_after_opening_move() {
        // Black (2,3): Black 4 disks, White 1, no disk blocked.
        // Black then flips 1 at each of (4,5), (5,4), (5,5).
        // White flips 1 at each of (2,2), (2,4), (4,2).
        let mut board = Board::new();
        assert!(crate::rules::place(&mut board, Player::Black, Pos::new(2, 3)));
        let expected = 3.0 / 128.0;
        assert!((heuristic(&board) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_blocked_disks_counted_twice() {
        // Full board: every disk blocked, no legal moves
        let mut board = Board::empty();
        for pos in Pos::all() {
            let cell = if pos.row < 5 { Cell::Black } else { Cell::White };
            board.set(pos, cell);
        }
        // 40 black, 24 white, all blocked
        assert_eq!(heuristic(&board), 2.0 * 16.0 / 128.0);
    }

    #[test]
    fn test_custom_weights() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Cell::Black);
        let weights = HeuristicWeights {
            disk: 1.0,
            blocked: 0.0,
            mobility: 0.0,
            normalizer: 1.0,
        };
        assert_eq!(heuristic_with(&board, &weights), 1.0);
    }
}
