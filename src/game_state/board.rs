//! Read-only 8x8 projection of a position set.
//!
//! A `Board` is rebuilt from scratch whenever the position set changes and is
//! never edited in place, so a simulated move always gets its own board.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position, Square};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    // [file][rank]
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn build(positions: &[Position]) -> Self {
        let mut board = Board::default();
        for position in positions {
            let cell = &mut board.squares[position.square.file() as usize]
                [position.square.rank() as usize];
            debug_assert!(cell.is_none(), "two pieces on {}", position.square);
            *cell = Some(position.piece);
        }
        board
    }

    #[inline]
    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.squares[square.file() as usize][square.rank() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.occupant(square).map(|piece| piece.color)
    }

    /// Every occupied square as a `Position`, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = Position> + '_ {
        Square::all().filter_map(|square| {
            self.occupant(square)
                .map(|piece| Position::new(piece, square))
        })
    }

    /// Square of `color`'s king, if it is still on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|square| self.occupant(*square) == Some(king))
    }
}
