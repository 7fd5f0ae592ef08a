//! Move simulation.
//!
//! `simulate` builds the position set a candidate move would produce without
//! touching the caller's data. The live game only replaces its own positions
//! after the simulated result has passed the self-check test.

use crate::game_state::chess_types::{Piece, Position};
use crate::moves::move_descriptions::{CandidateMove, MoveKind};

/// Position set after `candidate`, including capture removal and the rook
/// hop of a castle. A promotion with no choice yet leaves a pawn on the last
/// rank, which blocks and attacks exactly like the eventual piece would for
/// the purpose of the mover's own king safety.
pub fn simulate(candidate: &CandidateMove, positions: &[Position]) -> Vec<Position> {
    let mut next: Vec<Position> = positions
        .iter()
        .copied()
        .filter(|p| *p != candidate.mover && Some(*p) != candidate.captured)
        .collect();

    let arriving_piece = match candidate.kind {
        MoveKind::Promotion(Some(kind)) => Piece::new(kind, candidate.mover.color()),
        _ => candidate.mover.piece,
    };

    if let MoveKind::Castle {
        rook,
        rook_destination,
    } = candidate.kind
    {
        next.retain(|p| *p != rook);
        next.push(Position::new(rook.piece, rook_destination));
    }

    next.push(Position::new(arriving_piece, candidate.destination));
    next
}
