//! Search module for Reversi AI
//!
//! Depth-limited minimax with alpha-beta pruning over [`crate::GameSession`]
//! snapshots.

pub mod alphabeta;

pub use alphabeta::{search, SearchResult, SearchStats, Searcher, MAX_UTILITY, MIN_UTILITY};
