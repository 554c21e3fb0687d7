//! Searcher: root move selection and the injectable tie-break source.

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shakmaty::{Chess, Color, Position};

use super::report;
use super::types::{SearchResult, SearchStats, INFINITY};

pub struct Searcher<R = StdRng> {
    rng: R,
    pub(super) stats: SearchStats,
    last_info: String,
}

impl Searcher<StdRng> {
    /// Tie-breaks vary from run to run.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Tie-breaks are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl<R: Rng> Searcher<R> {
    pub fn with_rng(rng: R) -> Self {
        Searcher {
            rng,
            stats: SearchStats::default(),
            last_info: String::new(),
        }
    }

    /// Counters from the most recent `best_move` call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// UCI info line describing the most recent `best_move` call.
    pub fn last_info(&self) -> &str {
        &self.last_info
    }

    /// Pick a move for the side to move, `depth` plies deep.
    ///
    /// Returns `None` only when `pos` has no legal move. Candidates are
    /// shuffled first so that equally scored moves are chosen at random.
    pub fn best_move(&mut self, pos: &Chess, depth: u32) -> Option<SearchResult> {
        let start = Instant::now();
        self.stats = SearchStats::default();

        let mut candidates: Vec<_> = pos.legal_moves().into_iter().collect();
        if candidates.is_empty() {
            return None;
        }
        candidates.shuffle(&mut self.rng);

        let maximizing = pos.turn() == Color::White;
        let child_depth = depth.saturating_sub(1);
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_index: Option<usize> = None;
        let mut first_score = best_score;

        for (i, mv) in candidates.iter().enumerate() {
            let mut child = pos.clone();
            child.play_unchecked(mv);
            let score = self.search(&child, child_depth, -INFINITY, INFINITY, !maximizing);
            if i == 0 {
                first_score = score;
            }
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_index = Some(i);
            }
        }

        // Nothing beat the sentinel: fall back to the first shuffled move.
        let index = match best_index {
            Some(i) => i,
            None => {
                best_score = first_score;
                0
            }
        };
        let result = SearchResult {
            best_move: candidates.swap_remove(index),
            score: best_score,
        };

        let relative = if maximizing { result.score } else { -result.score };
        self.last_info = report::info_line(depth, relative, &self.stats, start.elapsed(), &result.best_move);
        debug!("{} cutoffs {}", self.last_info, self.stats.cutoffs);
        Some(result)
    }
}

impl Default for Searcher<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}
