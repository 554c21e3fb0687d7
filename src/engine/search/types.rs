//! Search results, stats, and constants.

use shakmaty::Move;

pub use crate::engine::eval::{DRAW_SCORE, MATE_SCORE};

/// Bound wider than any evaluation, used as the initial alpha/beta window.
pub const INFINITY: i32 = 30000;
/// Plies searched per engine move unless configured otherwise.
pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score of the resulting line, positive favours White.
    pub score: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}
