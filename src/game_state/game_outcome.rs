use std::fmt;

use crate::game_state::chess_types::Color;

/// Where the game stands between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { side_to_move: Color },
    Checkmate { winner: Color },
    Stalemate,
    DrawByRepetition,
    Resigned { winner: Color },
    /// A king left the board. Self-check prevention should make this
    /// unreachable; seeing it means a legality bug.
    KingCaptured { winner: Color },
}

impl GameStatus {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner }
            | GameStatus::Resigned { winner }
            | GameStatus::KingCaptured { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress { side_to_move } => write!(f, "{side_to_move} to move"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "Stalemate, the game is drawn"),
            GameStatus::DrawByRepetition => write!(f, "Draw by repetition"),
            GameStatus::Resigned { winner } => {
                write!(f, "{} resigns, {winner} wins", winner.opposite())
            }
            GameStatus::KingCaptured { winner } => write!(f, "King captured, {winner} wins"),
        }
    }
}

/// Result of an accepted move attempt. Rejections are `IllegalMove` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move committed; `check` is set when the side now to move is in check.
    Accepted { check: bool },
    /// Move is legal but waits for the promotion choice; nothing committed yet.
    PromotionRequired { color: Color },
    Checkmate { winner: Color },
    Stalemate,
    DrawByRepetition,
    KingCaptured { winner: Color },
}

impl MoveOutcome {
    #[inline]
    pub fn ends_game(&self) -> bool {
        !matches!(
            self,
            MoveOutcome::Accepted { .. } | MoveOutcome::PromotionRequired { .. }
        )
    }
}
