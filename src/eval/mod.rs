//! Evaluation module for Reversi positions
//!
//! The evaluation considers:
//! - Disk difference
//! - Blocked disks
//! - Average flips per legal move (a mobility signal)

pub mod heuristic;
pub mod weights;

pub use heuristic::{average_move_quality, heuristic, heuristic_with};
pub use weights::HeuristicWeights;
