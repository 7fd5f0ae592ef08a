//! Shape legality: does a piece's movement pattern allow this move?
//!
//! Nothing here knows whose turn it is or whether the mover's king ends up
//! exposed; that is layered on top by the legal move generator. Attack
//! detection (`attacks_square`) never considers castling and never recurses
//! into self-check evaluation.

use crate::chess_errors::IllegalMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Position, Square};
use crate::game_state::move_record::MoveRecord;
use crate::moves::bishop_moves::bishop_reaches;
use crate::moves::king_moves::{classify_castle, is_castling_shape, king_steps};
use crate::moves::knight_moves::knight_reaches;
use crate::moves::move_descriptions::{CandidateMove, MoveKind};
use crate::moves::pawn_moves::{classify_pawn_move, pawn_attacks};
use crate::moves::queen_moves::queen_reaches;
use crate::moves::rook_moves::rook_reaches;

/// Classifies `mover` travelling to `destination`, or says why it cannot.
pub fn classify_move(
    mover: Position,
    destination: Square,
    board: &Board,
    history: &[MoveRecord],
) -> Result<CandidateMove, IllegalMove> {
    let from = mover.square;
    let illegal = IllegalMove::IllegalShape {
        kind: mover.kind(),
        from,
        to: destination,
    };
    if from == destination {
        return Err(illegal);
    }

    if mover.kind() == PieceKind::King && is_castling_shape(from, destination) {
        let kind = classify_castle(mover, destination, board, history)?;
        return Ok(CandidateMove {
            mover,
            destination,
            kind,
            captured: None,
        });
    }

    let target = board.occupant(destination);
    if let Some(piece) = target {
        if piece.color == mover.color() {
            return Err(IllegalMove::FriendlyCapture(destination));
        }
    }
    let regular_capture = target.map(|piece| Position::new(piece, destination));

    let (kind, captured) = match mover.kind() {
        PieceKind::Pawn => classify_pawn_move(mover, destination, board, history)?,
        PieceKind::Knight if knight_reaches(from, destination) => {
            (MoveKind::Regular, regular_capture)
        }
        PieceKind::Bishop if bishop_reaches(from, destination, board) => {
            (MoveKind::Regular, regular_capture)
        }
        PieceKind::Rook if rook_reaches(from, destination, board) => {
            (MoveKind::Regular, regular_capture)
        }
        PieceKind::Queen if queen_reaches(from, destination, board) => {
            (MoveKind::Regular, regular_capture)
        }
        PieceKind::King if king_steps(from, destination) => (MoveKind::Regular, regular_capture),
        _ => return Err(illegal),
    };

    Ok(CandidateMove {
        mover,
        destination,
        kind,
        captured,
    })
}

/// Boolean form of `classify_move`.
#[inline]
pub fn can_reach(
    mover: Position,
    destination: Square,
    board: &Board,
    history: &[MoveRecord],
) -> bool {
    classify_move(mover, destination, board, history).is_ok()
}

/// True when `attacker` threatens `target` on this board, whatever stands on
/// `target`. Pawns threaten diagonally only; kings never threaten by castling.
pub fn attacks_square(attacker: Position, target: Square, board: &Board) -> bool {
    let from = attacker.square;
    if from == target {
        return false;
    }
    match attacker.kind() {
        PieceKind::Pawn => pawn_attacks(attacker.color(), from, target),
        PieceKind::Knight => knight_reaches(from, target),
        PieceKind::Bishop => bishop_reaches(from, target, board),
        PieceKind::Rook => rook_reaches(from, target, board),
        PieceKind::Queen => queen_reaches(from, target, board),
        PieceKind::King => king_steps(from, target),
    }
}
