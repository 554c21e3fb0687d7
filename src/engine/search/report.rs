//! UCI-style info lines for finished searches.

use std::time::Duration;

use shakmaty::Move;

use crate::rules::move_to_uci;

use super::types::SearchStats;

/// `score` is relative to the side to move, as UCI expects. The mate
/// sentinel carries no distance, so it is reported in centipawns too.
pub fn info_line(depth: u32, score: i32, stats: &SearchStats, elapsed: Duration, best: &Move) -> String {
    let millis = elapsed.as_millis();
    let nps = if millis > 0 {
        (stats.nodes as u128 * 1000) / millis
    } else {
        0
    };
    format!(
        "info depth {} score cp {} nodes {} nps {} time {} pv {}",
        depth,
        score,
        stats.nodes,
        nps,
        millis,
        move_to_uci(best)
    )
}
