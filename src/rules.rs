//! Thin binding to the `shakmaty` rules engine: notation parsing, FEN
//! serialization and a plain-text board diagram.

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{Board, CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Rank, Setup, Square};

use crate::error::{GameError, GameResult};

/// FEN of the board shown before any game has been started.
pub const EMPTY_BOARD_FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";

/// Halfmove clock at which the game is drawn without a claim.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that draw the game without a claim.
pub const FIVEFOLD: usize = 5;

/// Textual move formats accepted from the human player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// Standard algebraic, e.g. `e4`, `Nf3`, `O-O`, `exd8=Q+`
    Algebraic,
    /// Origin + destination + optional promotion, e.g. `e2e4`, `e7e8q`
    Coordinate,
}

/// Outcome of parsing in a single notation.
enum Parsed {
    Legal(Move),
    /// Well-formed text that names no legal move
    Illegal,
    /// Text is not in this notation at all
    Malformed,
}

fn parse_as(pos: &Chess, text: &str, notation: Notation) -> Parsed {
    match notation {
        Notation::Algebraic => match text.parse::<SanPlus>() {
            Ok(san) => match san.san.to_move(pos) {
                Ok(mv) => Parsed::Legal(mv),
                Err(_) => Parsed::Illegal,
            },
            Err(_) => Parsed::Malformed,
        },
        Notation::Coordinate => match text.parse::<UciMove>() {
            Ok(uci) => match uci.to_move(pos) {
                Ok(mv) if pos.is_legal(&mv) => Parsed::Legal(mv),
                _ => Parsed::Illegal,
            },
            Err(_) => Parsed::Malformed,
        },
    }
}

/// Parse `text` in one specific notation.
pub fn parse_move_as(pos: &Chess, text: &str, notation: Notation) -> GameResult<Move> {
    let text = text.trim();
    match parse_as(pos, text, notation) {
        Parsed::Legal(mv) => Ok(mv),
        Parsed::Illegal => Err(GameError::IllegalMove(text.to_string())),
        Parsed::Malformed => Err(GameError::InvalidMoveSyntax(text.to_string())),
    }
}

/// Parse a human move: algebraic first, coordinate notation as fallback.
///
/// Reports `IllegalMove` when at least one notation understood the text,
/// `InvalidMoveSyntax` when neither did.
pub fn parse_move(pos: &Chess, text: &str) -> GameResult<Move> {
    let text = text.trim();
    let mut understood = false;
    for notation in [Notation::Algebraic, Notation::Coordinate] {
        match parse_as(pos, text, notation) {
            Parsed::Legal(mv) => return Ok(mv),
            Parsed::Illegal => understood = true,
            Parsed::Malformed => {}
        }
    }
    if understood {
        Err(GameError::IllegalMove(text.to_string()))
    } else {
        Err(GameError::InvalidMoveSyntax(text.to_string()))
    }
}

/// Seventy-five moves by each side without a capture or pawn move.
/// Checkmate on the last move takes precedence.
pub fn is_seventy_five_move_draw(pos: &Chess) -> bool {
    pos.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES && !pos.is_checkmate()
}

/// Game over by anything visible in the position alone. Repetition needs the
/// game history and is tracked by the session.
pub fn is_terminal(pos: &Chess) -> bool {
    pos.is_game_over() || is_seventy_five_move_draw(pos)
}

/// Key identifying a position for repetition counting. Move counters are not
/// part of it.
pub fn position_key(pos: &Chess) -> Zobrist64 {
    pos.zobrist_hash(EnPassantMode::Legal)
}

pub fn position_from_fen(fen: &str) -> GameResult<Chess> {
    let parsed: Fen = fen
        .trim()
        .parse()
        .map_err(|e| GameError::InvalidPosition(format!("{}: {}", fen.trim(), e)))?;
    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| GameError::InvalidPosition(format!("{}: {}", fen.trim(), e)))
}

/// Canonical string for a position (FEN).
pub fn serialize(pos: &Chess) -> String {
    serialize_setup(pos.clone().into_setup(EnPassantMode::Legal))
}

pub fn serialize_setup(setup: Setup) -> String {
    Fen(setup).to_string()
}

pub fn move_to_uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

/// Plain-text diagram, rank 8 on top unless `flipped`.
pub fn render(board: &Board, flipped: bool) -> String {
    let ranks: Vec<u32> = if flipped {
        (0..8).collect()
    } else {
        (0..8).rev().collect()
    };
    let files: Vec<u32> = if flipped {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    let mut out = String::new();
    for &rank in &ranks {
        out.push_str(&format!("{} ", rank + 1));
        for &file in &files {
            let sq = Square::from_coords(File::new(file), Rank::new(rank));
            let c = board.piece_at(sq).map(|p| p.char()).unwrap_or('.');
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &file in &files {
        out.push(' ');
        out.push((b'a' + file as u8) as char);
    }
    out.push('\n');
    out
}

/// Parse a side name as typed by a user (`w`, `white`, `B`, ...).
pub fn parse_color(text: &str) -> Option<Color> {
    match text.trim().to_ascii_lowercase().as_str() {
        "w" | "white" => Some(Color::White),
        "b" | "black" => Some(Color::Black),
        _ => None,
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
