//! Piece tokens and move commands.
//!
//! A token is a piece letter followed by its square: `Pe2` is the white pawn
//! on e2, `nb8` the black knight on b8. Upper case names White, lower case
//! names Black. A move command is a token and a destination separated by
//! whitespace, e.g. `Pe2 e4`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position, Square};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parse a piece token such as `Pe2` or `ke8`.
pub fn parse_piece_token(token: &str) -> Result<Position, ChessErrors> {
    let mut chars = token.chars();
    let letter = chars
        .next()
        .ok_or_else(|| ChessErrors::InvalidPieceToken(token.to_owned()))?;
    let kind = PieceKind::from_letter(letter)
        .ok_or_else(|| ChessErrors::InvalidPieceToken(token.to_owned()))?;
    let color = if letter.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let square = algebraic_to_square(chars.as_str())
        .map_err(|_| ChessErrors::InvalidPieceToken(token.to_owned()))?;
    Ok(Position::new(Piece::new(kind, color), square))
}

/// Format a position as its token, e.g. `Pe2`.
pub fn piece_token(position: Position) -> String {
    format!(
        "{}{}",
        position.piece.letter(),
        square_to_algebraic(position.square)
    )
}

/// Parse `<token> <square>`.
pub fn parse_move_command(command: &str) -> Result<(Position, Square), ChessErrors> {
    let mut parts = command.split_whitespace();
    let (Some(token), Some(destination), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ChessErrors::InvalidMoveCommand(command.trim().to_owned()));
    };
    Ok((parse_piece_token(token)?, algebraic_to_square(destination)?))
}

/// Parse a promotion choice given as a letter or a name, e.g. `q` or `Queen`.
/// Kings and pawns parse here; the game decides whether the choice is allowed.
pub fn parse_piece_kind(input: &str) -> Option<PieceKind> {
    let input = input.trim();
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => PieceKind::from_letter(letter),
        _ => PieceKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(input)),
    }
}
