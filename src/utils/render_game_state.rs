//! Terminal board renderer.
//!
//! Draws the board with rank 8 at the top, either with Unicode chess glyphs
//! or with token letters for terminals that cannot show them.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Glyph set used when drawing pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardStyle {
    #[default]
    Unicode,
    Ascii,
}

/// Render the board to a string for terminal output.
pub fn render_board(board: &Board, style: BoardStyle) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8i8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8i8 {
            let piece = Square::checked(file, rank).and_then(|sq| board.occupant(sq));
            match (piece, style) {
                (Some(piece), BoardStyle::Unicode) => out.push(piece_to_unicode(piece)),
                (Some(piece), BoardStyle::Ascii) => out.push(piece.letter()),
                (None, BoardStyle::Unicode) => out.push('·'),
                (None, BoardStyle::Ascii) => out.push('.'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Render a list of pieces, e.g. for the captured-piece ledger.
pub fn render_pieces(pieces: &[Piece], style: BoardStyle) -> String {
    if pieces.is_empty() {
        return "-".to_owned();
    }
    pieces
        .iter()
        .map(|piece| match style {
            BoardStyle::Unicode => piece_to_unicode(*piece).to_string(),
            BoardStyle::Ascii => piece.letter().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
