//! Static evaluation: material plus piece-square bonuses, from White's point of view.

use shakmaty::{Chess, Color, Piece, Position, Role, Square};

use crate::rules::is_seventy_five_move_draw;

/// Score of a forced mate. Positive when White has delivered it.
pub const MATE_SCORE: i32 = 9999;
pub const DRAW_SCORE: i32 = 0;

pub fn role_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 20000,
    }
}

/// A piece-square table, indexed by square with a1 = 0, h8 = 63, seen from White.
pub type Table = [i32; 64];

const ZERO: Table = [0; 64];

#[rustfmt::skip]
const PAWN: Table = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10, -20, -20,  10,  10,   5,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,   5,  10,  25,  25,  10,   5,   5,
    10,  10,  20,  30,  30,  20,  10,  10,
    50,  50,  50,  50,  50,  50,  50,  50,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: Table = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

/// Positional bonus per role. Roles without a table score zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceSquareTables {
    tables: [Table; 6],
}

impl PieceSquareTables {
    /// All tables zero: pure material evaluation.
    pub const fn empty() -> Self {
        PieceSquareTables { tables: [ZERO; 6] }
    }

    /// Pawn and knight tables; every other role is zero.
    pub const fn standard() -> Self {
        PieceSquareTables {
            tables: [PAWN, KNIGHT, ZERO, ZERO, ZERO, ZERO],
        }
    }

    pub fn with_table(mut self, role: Role, table: Table) -> Self {
        self.tables[Self::slot(role)] = table;
        self
    }

    /// Bonus for `piece` on `sq`. Black pieces read the rank-mirrored square.
    #[inline]
    pub fn bonus(&self, piece: Piece, sq: Square) -> i32 {
        let sq = match piece.color {
            Color::White => sq,
            Color::Black => sq.flip_vertical(),
        };
        self.tables[Self::slot(piece.role)][sq as usize]
    }

    fn slot(role: Role) -> usize {
        match role {
            Role::Pawn => 0,
            Role::Knight => 1,
            Role::Bishop => 2,
            Role::Rook => 3,
            Role::Queen => 4,
            Role::King => 5,
        }
    }
}

impl Default for PieceSquareTables {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD_TABLES: PieceSquareTables = PieceSquareTables::standard();

/// Evaluate with the built-in tables.
pub fn evaluate(pos: &Chess) -> i32 {
    evaluate_with(pos, &STANDARD_TABLES)
}

/// Positive favours White. Checkmate scores `MATE_SCORE` for the side that
/// delivered it, stalemate, dead positions and the 75-move rule score zero.
pub fn evaluate_with(pos: &Chess, tables: &PieceSquareTables) -> i32 {
    if pos.is_checkmate() {
        return match pos.turn() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }
    if pos.is_stalemate() || pos.is_insufficient_material() || is_seventy_five_move_draw(pos) {
        return DRAW_SCORE;
    }

    let board = pos.board();
    let mut score = 0;
    for sq in board.occupied() {
        if let Some(piece) = board.piece_at(sq) {
            let value = role_value(piece.role) + tables.bonus(piece, sq);
            match piece.color {
                Color::White => score += value,
                Color::Black => score -= value,
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_bonus_matches() {
        let tables = PieceSquareTables::standard();
        let white = Piece { color: Color::White, role: Role::Pawn };
        let black = Piece { color: Color::Black, role: Role::Pawn };
        assert_eq!(tables.bonus(white, Square::D4), tables.bonus(black, Square::D5));
        assert_eq!(tables.bonus(white, Square::E7), 50);
        assert_eq!(tables.bonus(black, Square::E2), 50);
    }

    #[test]
    fn test_untabled_roles_score_zero() {
        let tables = PieceSquareTables::standard();
        let rook = Piece { color: Color::White, role: Role::Rook };
        assert!(shakmaty::Bitboard::FULL.into_iter().all(|sq| tables.bonus(rook, sq) == 0));
    }

    #[test]
    fn test_custom_table() {
        let mut table = [0; 64];
        table[Square::D1 as usize] = 7;
        let tables = PieceSquareTables::empty().with_table(Role::Queen, table);
        let queen = Piece { color: Color::Black, role: Role::Queen };
        assert_eq!(tables.bonus(queen, Square::D8), 7);
    }
}
