//! Pawn movement: single and double advance, diagonal capture, en passant and
//! promotion detection.

use crate::chess_errors::IllegalMove;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{en_passant_rank, pawn_start_rank, promotion_rank};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position, Square};
use crate::game_state::move_record::MoveRecord;
use crate::moves::move_descriptions::MoveKind;

/// True when a pawn of `color` on `from` attacks `target`, whatever stands there.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    target.rank() - from.rank() == color.forward() && (target.file() - from.file()).abs() == 1
}

/// Classifies a pawn move, returning its kind and any captured piece.
///
/// The caller has already refused friendly captures.
pub fn classify_pawn_move(
    mover: Position,
    to: Square,
    board: &Board,
    history: &[MoveRecord],
) -> Result<(MoveKind, Option<Position>), IllegalMove> {
    let color = mover.color();
    let from = mover.square;
    let forward = color.forward();
    let d_file = to.file() - from.file();
    let d_rank = to.rank() - from.rank();
    let illegal = IllegalMove::IllegalShape {
        kind: PieceKind::Pawn,
        from,
        to,
    };

    let finish = |captured: Option<Position>| {
        if to.rank() == promotion_rank(color) {
            (MoveKind::Promotion(None), captured)
        } else {
            (MoveKind::Regular, captured)
        }
    };

    if d_file == 0 && d_rank == forward {
        return if board.is_empty(to) {
            Ok(finish(None))
        } else {
            Err(illegal)
        };
    }

    if d_file == 0 && d_rank == 2 * forward && from.rank() == pawn_start_rank(color) {
        let crossed = from.offset(0, forward).ok_or(illegal)?;
        return if board.is_empty(crossed) && board.is_empty(to) {
            Ok((MoveKind::DoubleStep, None))
        } else {
            Err(illegal)
        };
    }

    if d_file.abs() == 1 && d_rank == forward {
        if let Some(target) = board.occupant(to) {
            if target.color != color {
                return Ok(finish(Some(Position::new(target, to))));
            }
            return Err(illegal);
        }
        if let Some(victim) = en_passant_victim(mover, to, board, history) {
            return Ok((MoveKind::EnPassant, Some(victim)));
        }
    }

    Err(illegal)
}

/// The enemy pawn an en passant capture onto `to` would take, if any.
///
/// Only the half-move immediately preceding this one can enable it.
fn en_passant_victim(
    mover: Position,
    to: Square,
    board: &Board,
    history: &[MoveRecord],
) -> Option<Position> {
    let color = mover.color();
    if mover.square.rank() != en_passant_rank(color) {
        return None;
    }
    let last = history.last()?;
    let enemy_pawn = Piece::new(PieceKind::Pawn, color.opposite());
    let beside = Square::checked(to.file(), mover.square.rank())?;
    if last.mover.piece == enemy_pawn
        && last.is_double_step()
        && last.destination == beside
        && board.occupant(beside) == Some(enemy_pawn)
    {
        Some(Position::new(enemy_pawn, beside))
    } else {
        None
    }
}
