//! King steps and castling.

use crate::chess_errors::IllegalMove;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    home_rank, KINGSIDE_ROOK_FILE, KING_HOME_FILE, QUEENSIDE_ROOK_FILE,
};
use crate::game_state::chess_types::{Piece, PieceKind, Position, Square};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::MoveKind;
use crate::moves::sliding_moves::is_path_clear;

/// One square in any direction.
#[inline]
pub fn king_steps(from: Square, to: Square) -> bool {
    let d_file = (to.file() - from.file()).abs();
    let d_rank = (to.rank() - from.rank()).abs();
    from != to && d_file <= 1 && d_rank <= 1
}

/// True when `to` is two files sideways from `from` on the same rank.
#[inline]
pub fn is_castling_shape(from: Square, to: Square) -> bool {
    from.rank() == to.rank() && (to.file() - from.file()).abs() == 2
}

/// Validates a castling request and names the rook that travels with the king.
///
/// Castling needs: king on its home square and never moved, the matching
/// rook on its corner and never moved, empty squares between them, and a
/// king that is not in check and does not cross or land on an attacked square.
pub fn classify_castle(
    king: Position,
    to: Square,
    board: &Board,
    history: &[MoveRecord],
) -> Result<MoveKind, IllegalMove> {
    let color = king.color();
    let home = home_rank(color);
    if king.square.file() != KING_HOME_FILE || king.square.rank() != home || to.rank() != home {
        return Err(IllegalMove::IllegalShape {
            kind: PieceKind::King,
            from: king.square,
            to,
        });
    }

    if history.iter().any(|record| record.mover.piece == king.piece) {
        return Err(IllegalMove::CastleBlocked);
    }

    let step = (to.file() - king.square.file()).signum();
    let (rook_file, rook_destination_file) = if step > 0 {
        (KINGSIDE_ROOK_FILE, KING_HOME_FILE + 1)
    } else {
        (QUEENSIDE_ROOK_FILE, KING_HOME_FILE - 1)
    };
    let rook_square = Square::new(rook_file, home)?;
    let rook_destination = Square::new(rook_destination_file, home)?;
    let rook = Position::new(Piece::new(PieceKind::Rook, color), rook_square);

    if board.occupant(rook_square) != Some(rook.piece) {
        return Err(IllegalMove::CastleBlocked);
    }
    if history.iter().any(|record| record.mover == rook) {
        return Err(IllegalMove::CastleBlocked);
    }
    if !is_path_clear(king.square, rook_square, board) {
        return Err(IllegalMove::CastleBlocked);
    }

    let enemy = color.opposite();
    let crossed = Square::new(king.square.file() + step, home)?;
    for square in [king.square, crossed, to] {
        if is_square_attacked(board, square, enemy) {
            return Err(IllegalMove::CastleBlocked);
        }
    }

    Ok(MoveKind::Castle {
        rook,
        rook_destination,
    })
}
