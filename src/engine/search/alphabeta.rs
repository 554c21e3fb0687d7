//! Minimax with alpha-beta pruning over position copies.

use rand::Rng;
use shakmaty::{Chess, Position};

use crate::engine::eval::evaluate;
use crate::rules::is_terminal;

use super::ordering::order_moves;
use super::searcher::Searcher;

impl<R: Rng> Searcher<R> {
    /// Score `pos` to `depth` plies. White maximizes, Black minimizes.
    ///
    /// Each child is played on a clone, so `pos` is never modified and an
    /// early cutoff needs no restoration.
    pub fn search(
        &mut self,
        pos: &Chess,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || is_terminal(pos) {
            return evaluate(pos);
        }

        let ordered = order_moves(pos.legal_moves());

        if maximizing {
            let mut best = i32::MIN;
            for mv in &ordered {
                let mut child = pos.clone();
                child.play_unchecked(mv);
                let score = self.search(&child, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in &ordered {
                let mut child = pos.clone();
                child.play_unchecked(mv);
                let score = self.search(&child, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}
