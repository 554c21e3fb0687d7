//! Search: fixed-depth minimax with alpha-beta pruning.

mod alphabeta;
mod ordering;
mod report;
mod searcher;
mod types;

pub use report::info_line;
pub use searcher::Searcher;
pub use types::{SearchResult, SearchStats, DEFAULT_DEPTH, DRAW_SCORE, INFINITY, MATE_SCORE};
