//! Append-only move history and captured-piece ledger.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position, Square};

/// One half-move: the mover as it stood before moving, and where it went.
///
/// Promotion and castling leave a single record naming the pawn or king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub mover: Position,
    pub destination: Square,
}

impl MoveRecord {
    /// True for a pawn advance of two ranks.
    pub fn is_double_step(&self) -> bool {
        self.mover.kind() == PieceKind::Pawn
            && self.mover.square.file() == self.destination.file()
            && (self.destination.rank() - self.mover.square.rank()).abs() == 2
    }
}

/// Half-moves compared by the repetition rule.
const REPETITION_WINDOW: usize = 4;

/// Draw when the last four half-moves repeat the four before them.
///
/// This compares literal (mover, destination) records, not board positions,
/// so it is narrower than the three-fold repetition rule.
pub fn is_repetition_draw(history: &[MoveRecord]) -> bool {
    let n = history.len();
    if n < 2 * REPETITION_WINDOW {
        return false;
    }
    (1..=REPETITION_WINDOW).all(|i| history[n - i] == history[n - i - REPETITION_WINDOW])
}

/// Captured pieces, grouped by the color of the piece that was lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedLedger {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedLedger {
    pub fn record(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    /// Pieces `color` has lost, in capture order.
    pub fn lost_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn len(&self) -> usize {
        self.white.len() + self.black.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
