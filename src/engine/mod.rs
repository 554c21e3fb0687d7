//! Chess engine components
//!
//! - Static evaluation with piece-square tables
//! - Fixed-depth alpha-beta search

pub mod eval;
pub mod search;

pub use eval::{evaluate, evaluate_with, PieceSquareTables, MATE_SCORE};
pub use search::{SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, INFINITY};
