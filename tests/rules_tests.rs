//! Rules Binding Tests
//!
//! Notation parsing, FEN serialization and board diagrams.

use chess_bot::error::GameError;
use chess_bot::rules::{
    self, EMPTY_BOARD_FEN, Notation, move_to_uci, parse_color, parse_move, parse_move_as,
    position_from_fen, serialize,
};
use shakmaty::{Chess, Color, Position, Setup};

// ============================================================================
// Move Parsing
// ============================================================================

#[test]
fn test_parse_algebraic() {
    let pos = Chess::default();
    assert_eq!(move_to_uci(&parse_move(&pos, "e4").unwrap()), "e2e4");
    assert_eq!(move_to_uci(&parse_move(&pos, "Nf3").unwrap()), "g1f3");
}

#[test]
fn test_parse_coordinate_fallback() {
    let pos = Chess::default();
    assert_eq!(move_to_uci(&parse_move(&pos, "g1f3").unwrap()), "g1f3");
    assert_eq!(move_to_uci(&parse_move(&pos, " d2d4 ").unwrap()), "d2d4");
}

#[test]
fn test_parse_castling_both_notations() {
    let pos = position_from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(move_to_uci(&parse_move(&pos, "O-O").unwrap()), "e1g1");
    assert_eq!(move_to_uci(&parse_move(&pos, "e1c1").unwrap()), "e1c1");
}

#[test]
fn test_parse_promotion() {
    let pos = position_from_fen("8/P7/8/8/8/8/8/4K2k w - - 0 1").unwrap();
    let algebraic = parse_move(&pos, "a8=N").unwrap();
    let coordinate = parse_move(&pos, "a7a8q").unwrap();
    assert_eq!(move_to_uci(&algebraic), "a7a8n");
    assert_eq!(move_to_uci(&coordinate), "a7a8q");
}

#[test]
fn test_parse_garbage_is_syntax_error() {
    let pos = Chess::default();
    assert_eq!(
        parse_move(&pos, "e9e9"),
        Err(GameError::InvalidMoveSyntax("e9e9".to_string()))
    );
    assert!(matches!(parse_move(&pos, "hello"), Err(GameError::InvalidMoveSyntax(_))));
}

#[test]
fn test_parse_well_formed_but_illegal() {
    let pos = Chess::default();
    assert_eq!(parse_move(&pos, "e5"), Err(GameError::IllegalMove("e5".to_string())));
    assert!(matches!(parse_move(&pos, "e2e5"), Err(GameError::IllegalMove(_))));
    assert!(matches!(parse_move(&pos, "Ke2"), Err(GameError::IllegalMove(_))));
}

#[test]
fn test_parse_single_notation() {
    let pos = Chess::default();
    assert!(parse_move_as(&pos, "e4", Notation::Algebraic).is_ok());
    assert!(matches!(
        parse_move_as(&pos, "e4", Notation::Coordinate),
        Err(GameError::InvalidMoveSyntax(_))
    ));
    assert!(parse_move_as(&pos, "e2e4", Notation::Coordinate).is_ok());
}

// ============================================================================
// FEN
// ============================================================================

#[test]
fn test_fen_startpos() {
    assert_eq!(
        serialize(&Chess::default()),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
}

#[test]
fn test_fen_roundtrip_kiwipete() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    assert_eq!(serialize(&position_from_fen(fen).unwrap()), fen);
}

#[test]
fn test_fen_en_passant_kept_when_legal() {
    let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
    assert_eq!(serialize(&position_from_fen(fen).unwrap()), fen);
}

#[test]
fn test_fen_invalid() {
    assert!(matches!(position_from_fen("not a fen"), Err(GameError::InvalidPosition(_))));
    // No kings
    assert!(matches!(position_from_fen(EMPTY_BOARD_FEN), Err(GameError::InvalidPosition(_))));
}

#[test]
fn test_empty_setup_serializes_to_empty_board() {
    assert_eq!(rules::serialize_setup(Setup::empty()), EMPTY_BOARD_FEN);
}

// ============================================================================
// Diagram and Colors
// ============================================================================

#[test]
fn test_render_orientation() {
    let pos = Chess::default();
    let white = rules::render(pos.board(), false);
    let black = rules::render(pos.board(), true);
    let white_lines: Vec<&str> = white.lines().collect();
    let black_lines: Vec<&str> = black.lines().collect();
    assert_eq!(white_lines[0], "8  r n b q k b n r");
    assert_eq!(white_lines[7], "1  R N B Q K B N R");
    assert_eq!(white_lines[8], "   a b c d e f g h");
    assert_eq!(black_lines[0], "1  R N B K Q B N R");
    assert_eq!(black_lines[8], "   h g f e d c b a");
}

#[test]
fn test_parse_color() {
    assert_eq!(parse_color("W"), Some(Color::White));
    assert_eq!(parse_color("white"), Some(Color::White));
    assert_eq!(parse_color("b"), Some(Color::Black));
    assert_eq!(parse_color("Black"), Some(Color::Black));
    assert_eq!(parse_color("red"), None);
}
