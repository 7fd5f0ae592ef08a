use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::sliding_moves::is_path_clear;

/// Bishop geometry: equal file and rank distance, nothing in between.
#[inline]
pub fn bishop_reaches(from: Square, to: Square, board: &Board) -> bool {
    let d_file = (to.file() - from.file()).abs();
    let d_rank = (to.rank() - from.rank()).abs();
    d_file != 0 && d_file == d_rank && is_path_clear(from, to, board)
}
