//! Main AI engine wrapping the search
//!
//! [`AIEngine`] owns a [`Searcher`] and a configured depth, times each search
//! and logs it.
//!
//! # Example
//!
//! ```
//! use reversi::{AIEngine, GameSession};
//!
//! let mut engine = AIEngine::with_depth(2);
//! let mut game = GameSession::new();
//!
//! let result = engine.get_move_with_stats(&game);
//! if let Some(pos) = result.best_move {
//!     assert!(game.step(pos));
//! }
//! println!("Score: {:.4}, nodes: {}", result.score, result.nodes);
//! ```

use std::time::Instant;

use tracing::{debug, warn};

use crate::board::Pos;
use crate::config::GameConfig;
use crate::game::GameSession;
use crate::search::{SearchResult, Searcher};

/// Depth used when nothing else is configured
pub const DEFAULT_DEPTH: u8 = 1;

/// Deepest search the engine accepts
pub const MAX_SEARCH_DEPTH: u8 = 10;

/// Result of a move search with timing.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Value of the searched position, positive favors Black
    pub score: f64,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI engine for Reversi.
pub struct AIEngine {
    searcher: Searcher,
    max_depth: u8,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine searching `depth` plies, clamped to
    /// 1..=[`MAX_SEARCH_DEPTH`].
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth: depth.clamp(1, MAX_SEARCH_DEPTH),
        }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::with_depth(config.search_depth)
    }

    /// Best move for the player to move, None if there is nothing to play.
    pub fn get_move(&mut self, game: &GameSession) -> Option<Pos> {
        self.get_move_with_stats(game).best_move
    }

    /// Search the position and report the move with statistics.
    pub fn get_move_with_stats(&mut self, game: &GameSession) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(game, self.max_depth);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            player = %game.turn(),
            depth = result.depth,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms,
            "search finished"
        );
        if result.best_move.is_none() && !game.is_terminal() {
            warn!(player = %game.turn(), "search returned no move for a live position");
        }

        MoveResult::from_search(result, time_ms)
    }

    /// Set maximum search depth, clamped like [`AIEngine::with_depth`].
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth.clamp(1, MAX_SEARCH_DEPTH);
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
