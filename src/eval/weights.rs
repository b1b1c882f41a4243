//! Weights for Reversi evaluation
//!
//! These are untuned: every term weighs 1 and the sum is scaled by the
//! largest possible disk-plus-blocked total, so that scores share the
//! [-1, 1] range of the game utility.

use crate::board::TOTAL_CELLS;

/// Per-term weights of the heuristic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeights {
    /// Per disk, signed by owner
    pub disk: f64,
    /// Extra per blocked disk, signed by owner
    pub blocked: f64,
    /// Multiplier on the average-move-quality difference
    pub mobility: f64,
    /// Divisor applied to the weighted sum
    pub normalizer: f64,
}

impl HeuristicWeights {
    pub const DEFAULT: HeuristicWeights = HeuristicWeights {
        disk: 1.0,
        blocked: 1.0,
        mobility: 1.0,
        normalizer: (TOTAL_CELLS * 2) as f64, // 128
    };
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
