//! Reversi (Othello) engine with minimax search
//!
//! An 8x8 Reversi implementation with an alpha-beta game-tree search:
//! - Standard initial layout, Black moves first
//! - A placement is legal only if it flips at least one opponent run
//! - A player with no legal placement passes automatically
//! - The game ends when the board is full or the player to move is stuck
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Flip geometry and blocked-disk detection
//! - [`game`]: Game session with turn tracking and the forced-pass rule
//! - [`eval`]: Heuristic evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI engine wrapping the search
//! - [`demo`]: Text demos used by the CLI
//!
//! # Quick Start
//!
//! ```
//! use reversi::{AIEngine, GameSession};
//!
//! let mut game = GameSession::new();
//! let mut engine = AIEngine::with_depth(2);
//!
//! while !game.is_terminal() {
//!     let Some(pos) = engine.get_move(&game) else { break };
//!     assert!(game.step(pos));
//! }
//!
//! let (black, white) = game.count_disks();
//! println!("{black} - {white}, utility {}", game.utility());
//! ```

pub mod board;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{Error, Result};
pub use game::GameSession;
pub use search::search;
