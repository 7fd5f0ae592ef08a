use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_reaches;
use crate::moves::rook_moves::rook_reaches;

#[inline]
pub fn queen_reaches(from: Square, to: Square, board: &Board) -> bool {
    rook_reaches(from, to, board) || bishop_reaches(from, to, board)
}
