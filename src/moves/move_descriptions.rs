//! Description of a shape-legal move, as produced by the movement rules and
//! consumed by the simulator.

use crate::game_state::chess_types::{PieceKind, Position, Square};

/// Distinguishes regular moves from moves with special effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// A regular move or regular capture.
    Regular,
    /// Two-rank pawn advance from its start rank.
    DoubleStep,
    /// Pawn capture of a pawn that just double-stepped past it.
    EnPassant,
    /// King moves two files; the rook jumps to the square the king crossed.
    Castle {
        rook: Position,
        rook_destination: Square,
    },
    /// Pawn lands on its last rank. `None` until the player picks a kind.
    Promotion(Option<PieceKind>),
}

/// A move that satisfies its piece's movement rules. Self-check has not
/// been considered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub mover: Position,
    pub destination: Square,
    pub kind: MoveKind,
    /// Piece removed by the move; for en passant this is not on `destination`.
    pub captured: Option<Position>,
}

impl CandidateMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// Same move with the promotion choice filled in.
    pub fn with_promotion(self, kind: PieceKind) -> Self {
        match self.kind {
            MoveKind::Promotion(_) => CandidateMove {
                kind: MoveKind::Promotion(Some(kind)),
                ..self
            },
            _ => self,
        }
    }
}
