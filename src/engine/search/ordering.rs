//! Move ordering: captures first.

use shakmaty::{Move, MoveList};

/// Stable partition: captures keep their relative order ahead of quiet moves.
pub(super) fn order_moves(moves: MoveList) -> Vec<Move> {
    let mut ordered: Vec<Move> = moves.into_iter().collect();
    ordered.sort_by_key(|mv| !mv.is_capture());
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::fen::Fen;
    use shakmaty::{CastlingMode, Chess, Position};

    #[test]
    fn test_captures_first_and_stable() {
        let f: Fen = "4k3/8/8/3p1p2/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        let pos: Chess = f.into_position(CastlingMode::Standard).unwrap();
        let legals = pos.legal_moves();
        let quiet_before: Vec<Move> = legals.iter().filter(|m| !m.is_capture()).cloned().collect();
        let ordered = order_moves(legals);

        assert_eq!(ordered.iter().take_while(|m| m.is_capture()).count(), 2);
        assert!(ordered[2..].iter().all(|m| !m.is_capture()));
        assert_eq!(&ordered[2..], &quiet_before[..]);
    }
}
