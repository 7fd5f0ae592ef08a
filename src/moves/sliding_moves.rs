use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// True when every square strictly between `from` and `to` is empty.
///
/// Callers must pass squares on a common rank, file or diagonal.
pub fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    let file_step = (to.file() - from.file()).signum();
    let rank_step = (to.rank() - from.rank()).signum();

    let mut current = from.offset(file_step, rank_step);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(file_step, rank_step);
    }

    false
}
