//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values used by piece tokens and the console.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    };

    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank));
    }

    let file_index = (file as u8 - b'a') as i8;
    let rank_index = (rank as u8 - b'1') as i8;
    Square::checked(file_index, rank_index)
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file() as u8);
    let rank_char = char::from(b'1' + square.rank() as u8);
    format!("{file_char}{rank_char}")
}
