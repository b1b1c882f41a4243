//! Game session: board plus turn tracking
//!
//! [`GameSession`] is the unit the search engine clones. Every mutation goes
//! through [`GameSession::step`], which applies the flip rules, advances the
//! turn, and handles the forced-pass rule.
//!
//! # Example
//!
//! ```
//! use reversi::{GameSession, Player, Pos};
//!
//! let mut game = GameSession::new();
//! assert!(game.step(Pos::new(2, 3)));
//! assert_eq!(game.turn(), Player::White);
//! assert!(!game.step(Pos::new(0, 0))); // illegal, nothing changes
//! ```

use std::cmp::Ordering;

use tracing::trace;

use crate::board::{Board, Player, Pos, MAX_MOVES};
use crate::eval;
use crate::rules::{has_legal_move, place, total_flips};

/// A Reversi game in progress.
///
/// Cloning copies the whole board, so clones never share state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSession {
    board: Board,
    turn: Player,
    moves_applied: u32,
}

impl GameSession {
    /// Fresh game: four center disks, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Black,
            moves_applied: 0,
        }
    }

    /// Session over an arbitrary position.
    ///
    /// `moves_applied` is what the full-board check compares against
    /// [`MAX_MOVES`]; pass the number of placements the position represents.
    pub fn from_position(board: Board, turn: Player, moves_applied: u32) -> Self {
        Self {
            board,
            turn,
            moves_applied,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Successful placements since the start
    #[inline]
    pub fn moves_applied(&self) -> u32 {
        self.moves_applied
    }

    /// Play `pos` for the player to move.
    ///
    /// On success the turn passes to the opponent, unless the opponent has no
    /// legal placement, in which case it comes straight back. Returns false
    /// and leaves the session untouched when the placement is illegal.
    pub fn step(&mut self, pos: Pos) -> bool {
        if !place(&mut self.board, self.turn, pos) {
            return false;
        }
        trace!(player = %self.turn, %pos, "move applied");

        self.turn = self.turn.opponent();
        self.moves_applied += 1;
        if !self.has_any_move() {
            trace!(player = %self.turn, "forced pass");
            self.turn = self.turn.opponent();
        }
        true
    }

    /// Whether the player to move has any legal placement
    #[inline]
    pub fn has_any_move(&self) -> bool {
        has_legal_move(&self.board, self.turn)
    }

    /// Board filled, or the player to move is stuck
    pub fn is_terminal(&self) -> bool {
        self.moves_applied == MAX_MOVES || !self.has_any_move()
    }

    /// +1 if Black has more disks, -1 if White has more, 0 on a tie
    pub fn utility(&self) -> i32 {
        let (black, white) = self.board.count_disks();
        match black.cmp(&white) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        }
    }

    /// Disk totals as (black, white)
    #[inline]
    pub fn count_disks(&self) -> (u32, u32) {
        self.board.count_disks()
    }

    /// Positional estimate, positive favors Black. See [`eval::heuristic()`].
    #[inline]
    pub fn heuristic(&self) -> f64 {
        eval::heuristic(&self.board)
    }

    /// Mobility term of the heuristic. See [`eval::average_move_quality()`].
    #[inline]
    pub fn average_move_quality(&self) -> f64 {
        eval::average_move_quality(&self.board)
    }

    /// Legal placements for the player to move, row-major
    pub fn legal_moves(&self) -> Vec<Pos> {
        Pos::all()
            .filter(|&pos| total_flips(&self.board, self.turn, pos) > 0)
            .collect()
    }

    /// Each legal move paired with the session it leads to
    pub fn successors(&self) -> Vec<(Pos, GameSession)> {
        self.legal_moves()
            .into_iter()
            .filter_map(|pos| {
                let mut next = self.clone();
                next.step(pos).then_some((pos, next))
            })
            .collect()
    }

    /// Play the first legal move in row-major order
    pub fn first_step(&mut self) -> bool {
        Pos::all().any(|pos| self.step(pos))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
