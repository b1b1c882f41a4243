//! Game rules for Reversi
//!
//! This module implements the board geometry the game is played on:
//! - Flip rules (bracketing runs of opponent disks in eight directions)
//! - Blocked-disk detection (used by the evaluation)

pub mod blocked;
pub mod flip;

// Re-exports for convenient access
pub use blocked::is_blocked;
pub use flip::{apply_direction, count_flips, has_legal_move, place, total_flips};
