use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::sliding_moves::is_path_clear;

/// Rook geometry: same file or same rank, nothing in between.
/// The destination itself may hold anything; colour is checked elsewhere.
#[inline]
pub fn rook_reaches(from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }
    let same_line = from.file() == to.file() || from.rank() == to.rank();
    same_line && is_path_clear(from, to, board)
}
