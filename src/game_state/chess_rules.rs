//! Canonical chess-rule constants.
//!
//! Back-rank order, pawn and home ranks, castling geometry and the set of
//! legal promotion choices.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position, Square};

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Kinds a pawn may become on its last rank.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub const KING_HOME_FILE: i8 = 4;
pub const QUEENSIDE_ROOK_FILE: i8 = 0;
pub const KINGSIDE_ROOK_FILE: i8 = 7;

#[inline]
pub const fn home_rank(color: Color) -> i8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Rank a pawn must stand on to capture en passant.
#[inline]
pub const fn en_passant_rank(color: Color) -> i8 {
    match color {
        Color::White => 4,
        Color::Black => 3,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub fn is_promotion_choice(kind: PieceKind) -> bool {
    PROMOTION_CHOICES.contains(&kind)
}

/// The standard 32-piece starting position.
pub fn starting_positions() -> Vec<Position> {
    let mut positions = Vec::with_capacity(32);
    for color in [Color::White, Color::Black] {
        let back = home_rank(color);
        let pawns = pawn_start_rank(color);
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            if let Some(square) = Square::checked(file, back) {
                positions.push(Position::new(Piece::new(*kind, color), square));
            }
            if let Some(square) = Square::checked(file, pawns) {
                positions.push(Position::new(Piece::new(PieceKind::Pawn, color), square));
            }
        }
    }
    positions
}
