use crate::game_state::chess_types::Square;

/// The eight (file, rank) jumps available to a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Knights jump; nothing can block them.
#[inline]
pub fn knight_reaches(from: Square, to: Square) -> bool {
    let jump = (to.file() - from.file(), to.rank() - from.rank());
    KNIGHT_OFFSETS.contains(&jump)
}
