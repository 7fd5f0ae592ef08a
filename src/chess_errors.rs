//! Errors used throughout the rules core.
//!
//! Two enums cover the two failure families:
//! - `IllegalMove` is the rejection taxonomy for a proposed move. Every
//!   variant is recoverable: the game continues and the caller re-prompts.
//! - `ChessErrors` covers malformed input and invalid custom setups (notation
//!   that fails to parse, a position without a king, two pieces on a square).
//!
//! Neither family is fatal. The only way the core stops accepting moves is a
//! terminal game state.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Why a proposed move was refused. The live game state is untouched
/// whenever one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The piece cannot reach the destination under its movement rules.
    #[error("a {kind} cannot move from {from} to {to}")]
    IllegalShape {
        kind: PieceKind,
        from: Square,
        to: Square,
    },

    /// The destination holds a piece of the mover's own color.
    #[error("cannot capture your own piece on {0}")]
    FriendlyCapture(Square),

    /// Committing the move would leave the mover's king attacked.
    #[error("that move would leave the {0} king in check")]
    MovesIntoCheck(Color),

    /// Castling preconditions failed: path occupied, king or rook previously
    /// moved, rook missing, king in check, or crossing/landing square attacked.
    #[error("castling is not allowed here")]
    CastleBlocked,

    /// The destination lies outside the 8x8 board.
    #[error("square ({file}, {rank}) is not on the board")]
    OffBoard { file: i8, rank: i8 },

    /// A promotion choice other than Knight, Bishop, Rook or Queen.
    #[error("cannot promote to a {0}; choose a knight, bishop, rook or queen")]
    InvalidPromotionChoice(PieceKind),

    /// The token does not match the piece standing on its square.
    #[error("no such piece on {0}")]
    NoPieceAtOrigin(Square),

    /// The token belongs to the side that is not on move.
    #[error("it is {0}'s turn")]
    NotYourTurn(Color),

    /// A pawn is waiting for its promotion choice.
    #[error("a promotion choice is still pending")]
    PromotionPending,

    /// `promote` was called with nothing to promote.
    #[error("no promotion is pending")]
    NoPromotionPending,

    /// The game has already reached a terminal state.
    #[error("the game is over")]
    GameOver,
}

/// Setup and notation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A single character used during algebraic parsing was invalid.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// A square string failed to parse.
    #[error("invalid square '{0}'")]
    InvalidAlgebraicString(String),

    /// A piece token such as `Pe2` failed to parse.
    #[error("invalid piece token '{0}'")]
    InvalidPieceToken(String),

    /// A move command was not of the form `<token> <square>`.
    #[error("invalid move command '{0}'")]
    InvalidMoveCommand(String),

    /// Two pieces were placed on the same square during setup.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// A custom setup lacks a king for one side.
    #[error("the {0} side has no king")]
    MissingKing(Color),

    /// A custom setup has more than one king for one side.
    #[error("the {0} side has more than one king")]
    DuplicateKing(Color),
}
