//! Game legality.
//!
//! Wraps shape legality with simulation and the self-check test, and
//! enumerates every game-legal move for one side.

use tracing::trace;

use crate::chess_errors::IllegalMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position, Square};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_move_apply::simulate;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_descriptions::CandidateMove;
use crate::moves::move_rules::classify_move;

/// Shape-legal and does not leave the mover's own king attacked.
pub fn validate_move(
    mover: Position,
    destination: Square,
    positions: &[Position],
    board: &Board,
    history: &[MoveRecord],
) -> Result<CandidateMove, IllegalMove> {
    let candidate = classify_move(mover, destination, board, history)?;
    let next = simulate(&candidate, positions);
    let next_board = Board::build(&next);
    if is_king_in_check(&next_board, mover.color()) {
        trace!(%mover, %destination, "candidate exposes own king");
        return Err(IllegalMove::MovesIntoCheck(mover.color()));
    }
    Ok(candidate)
}

/// Every game-legal move for `color`. Promotions appear once, with the
/// choice still open.
pub fn legal_moves(
    color: Color,
    positions: &[Position],
    board: &Board,
    history: &[MoveRecord],
) -> Vec<CandidateMove> {
    let mut out = Vec::with_capacity(64);
    for mover in positions.iter().filter(|p| p.color() == color) {
        out.extend(
            Square::all()
                .filter_map(|to| validate_move(*mover, to, positions, board, history).ok()),
        );
    }
    out
}

/// Squares `mover` may legally travel to.
pub fn legal_destinations(
    mover: Position,
    positions: &[Position],
    board: &Board,
    history: &[MoveRecord],
) -> Vec<Square> {
    Square::all()
        .filter(|to| validate_move(mover, *to, positions, board, history).is_ok())
        .collect()
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
    fn startpos_has_twenty_legal_moves_each_side() {
        let positions = starting_positions();
        let board = Board::build(&positions);
        assert_eq!(legal_moves(Color::White, &positions, &board, &[]).len(), 20);
        assert_eq!(legal_moves(Color::Black, &positions, &board, &[]).len(), 20);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let positions = [
            at(PieceKind::King, Color::White, "e1"),
            at(PieceKind::Knight, Color::White, "e2"),
            at(PieceKind::Rook, Color::Black, "e8"),
            at(PieceKind::King, Color::Black, "a8"),
        ];
        let board = Board::build(&positions);
        let knight = positions[1];
        assert_eq!(
            validate_move(knight, sq("c3"), &positions, &board, &[]),
            Err(IllegalMove::MovesIntoCheck(Color::White))
        );
        assert!(legal_destinations(knight, &positions, &board, &[]).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let positions = [
            at(PieceKind::King, Color::White, "e1"),
            at(PieceKind::Rook, Color::Black, "d8"),
            at(PieceKind::King, Color::Black, "a8"),
        ];
        let board = Board::build(&positions);
        assert_eq!(
            validate_move(positions[0], sq("d1"), &positions, &board, &[]),
            Err(IllegalMove::MovesIntoCheck(Color::White))
        );
        assert!(validate_move(positions[0], sq("f1"), &positions, &board, &[]).is_ok());
    }

    #[test]
    fn king_may_not_retreat_along_the_checking_line() {
        let positions = [
            at(PieceKind::King, Color::White, "e2"),
            at(PieceKind::Rook, Color::Black, "e8"),
            at(PieceKind::King, Color::Black, "a8"),
        ];
        let board = Board::build(&positions);
        assert!(validate_move(positions[0], sq("e1"), &positions, &board, &[]).is_err());
        assert!(validate_move(positions[0], sq("d1"), &positions, &board, &[]).is_ok());
    }
}
