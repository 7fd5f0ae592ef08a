//! Check, checkmate and stalemate oracle.
//!
//! Attack detection asks the shape rules one ply deep and never evaluates
//! the attacker's own king safety. The "any legal move" search is where game
//! legality (shape + simulate + self-check) is applied exhaustively.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position, Square};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_move_generator::validate_move;
use crate::moves::move_rules::attacks_square;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// True when any piece of `attacker_color` threatens `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces()
        .filter(|p| p.color() == attacker_color)
        .any(|attacker| attacks_square(attacker, square, board))
}

/// Pieces of `attacker_color` threatening `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Position> {
    board
        .pieces()
        .filter(|p| p.color() == attacker_color)
        .filter(|attacker| attacks_square(*attacker, square, board))
        .collect()
}

/// True when `color`'s king is attacked. A board without that king is not
/// in check; the tracker reports a missing king separately.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True when `color` has at least one game-legal move.
///
/// Tries every piece of that color against every square and stops at the
/// first move that is shape-legal and does not expose its own king.
pub fn has_any_legal_move(
    color: Color,
    positions: &[Position],
    board: &Board,
    history: &[MoveRecord],
) -> bool {
    positions
        .iter()
        .filter(|p| p.color() == color)
        .any(|mover| {
            Square::all().any(|to| validate_move(*mover, to, positions, board, history).is_ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::starting_positions;
    use crate::game_state::chess_types::{Piece, PieceKind};

    fn sq(name: &str) -> Square {
        let b = name.as_bytes();
        Square::checked((b[0] - b'a') as i8, (b[1] - b'1') as i8).unwrap()
    }

    fn at(kind: PieceKind, color: Color, name: &str) -> Position {
        Position::new(Piece::new(kind, color), sq(name))
    }

    #[test]
    fn nobody_is_in_check_at_the_start() {
        let positions = starting_positions();
        let board = Board::build(&positions);
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
        assert!(has_any_legal_move(Color::White, &positions, &board, &[]));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let positions = [
            at(PieceKind::King, Color::White, "e1"),
            at(PieceKind::King, Color::Black, "a8"),
            at(PieceKind::Rook, Color::Black, "e7"),
        ];
        let board = Board::build(&positions);
        assert!(is_king_in_check(&board, Color::White));
        assert_eq!(
            attackers_to_square(&board, sq("e1"), Color::Black),
            vec![at(PieceKind::Rook, Color::Black, "e7")]
        );
    }

    #[test]
    fn interposed_piece_blocks_check() {
        let positions = [
            at(PieceKind::King, Color::White, "e1"),
            at(PieceKind::Bishop, Color::White, "e2"),
            at(PieceKind::King, Color::Black, "a8"),
            at(PieceKind::Rook, Color::Black, "e7"),
        ];
        let board = Board::build(&positions);
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn back_rank_mate_has_no_legal_move() {
        let positions = [
            at(PieceKind::King, Color::Black, "g8"),
            at(PieceKind::Pawn, Color::Black, "f7"),
            at(PieceKind::Pawn, Color::Black, "g7"),
            at(PieceKind::Pawn, Color::Black, "h7"),
            at(PieceKind::Rook, Color::White, "a8"),
            at(PieceKind::King, Color::White, "g1"),
        ];
        let board = Board::build(&positions);
        assert!(is_king_in_check(&board, Color::Black));
        assert!(!has_any_legal_move(Color::Black, &positions, &board, &[]));
    }

    #[test]
    fn removing_the_attacker_lifts_the_mate() {
        let positions = [
            at(PieceKind::King, Color::Black, "g8"),
            at(PieceKind::Pawn, Color::Black, "f7"),
            at(PieceKind::Pawn, Color::Black, "g7"),
            at(PieceKind::Pawn, Color::Black, "h7"),
            at(PieceKind::King, Color::White, "g1"),
        ];
        let board = Board::build(&positions);
        assert!(!is_king_in_check(&board, Color::Black));
        assert!(has_any_legal_move(Color::Black, &positions, &board, &[]));
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let positions = [
            at(PieceKind::King, Color::Black, "a8"),
            at(PieceKind::Queen, Color::White, "b6"),
            at(PieceKind::King, Color::White, "c1"),
        ];
        let board = Board::build(&positions);
        assert!(!is_king_in_check(&board, Color::Black));
        assert!(!has_any_legal_move(Color::Black, &positions, &board, &[]));
    }
}
