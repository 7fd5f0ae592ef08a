//! The game state tracker.
//!
//! `GameState` owns the live position set, move history, captured-piece
//! ledger and turn order. It changes only through `attempt_move`, `promote`
//! and `resign`; every rejected attempt leaves it exactly as it was.
//!
//! A move attempt runs, in order: turn/token checks, shape legality,
//! simulation, the self-check test, commit, turn toggle, and terminal
//! evaluation (king captured, checkmate, stalemate, repetition; first match
//! wins).

use chrono::{DateTime, Local, TimeDelta};
use tracing::{debug, error, info, warn};

use crate::chess_errors::{ChessErrors, IllegalMove};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{is_promotion_choice, starting_positions};
use crate::game_state::chess_types::{Color, PieceKind, Position, Square};
use crate::game_state::game_outcome::{GameStatus, MoveOutcome};
use crate::game_state::move_record::{is_repetition_draw, CapturedLedger, MoveRecord};
use crate::move_generation::legal_move_apply::simulate;
use crate::move_generation::legal_move_checks::{has_any_legal_move, is_king_in_check};
use crate::move_generation::legal_move_generator::{legal_destinations, legal_moves, validate_move};
use crate::moves::move_descriptions::CandidateMove;

#[derive(Debug, Clone)]
pub struct GameState {
    positions: Vec<Position>,
    board: Board,
    history: Vec<MoveRecord>,
    captured: CapturedLedger,
    side_to_move: Color,
    status: GameStatus,
    pending_promotion: Option<CandidateMove>,
    started_at: DateTime<Local>,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self::assemble(starting_positions(), Color::White)
    }

    /// Custom setup. Requires exactly one king per side and at most one
    /// piece per square. History starts empty, so kings and rooks on their
    /// home squares keep their castling eligibility.
    pub fn from_positions(positions: Vec<Position>, side_to_move: Color) -> Result<Self, ChessErrors> {
        let mut seen = Vec::<Square>::with_capacity(positions.len());
        for position in &positions {
            if seen.contains(&position.square) {
                return Err(ChessErrors::SquareOccupied(position.square));
            }
            seen.push(position.square);
        }
        for color in [Color::White, Color::Black] {
            let kings = positions
                .iter()
                .filter(|p| p.color() == color && p.kind() == PieceKind::King)
                .count();
            match kings {
                0 => return Err(ChessErrors::MissingKing(color)),
                1 => {}
                _ => return Err(ChessErrors::DuplicateKing(color)),
            }
        }
        Ok(Self::assemble(positions, side_to_move))
    }

    fn assemble(positions: Vec<Position>, side_to_move: Color) -> Self {
        let board = Board::build(&positions);
        GameState {
            positions,
            board,
            history: Vec::new(),
            captured: CapturedLedger::default(),
            side_to_move,
            status: GameStatus::InProgress { side_to_move },
            pending_promotion: None,
            started_at: Local::now(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn captured(&self) -> &CapturedLedger {
        &self.captured
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The promotion move waiting for a piece choice, if any.
    #[inline]
    pub fn pending_promotion(&self) -> Option<&CandidateMove> {
        self.pending_promotion.as_ref()
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn elapsed(&self) -> TimeDelta {
        Local::now() - self.started_at
    }

    pub fn in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    /// Game-legal destinations for `token`; empty if the token is stale.
    pub fn legal_destinations(&self, token: Position) -> Vec<Square> {
        if self.board.occupant(token.square) != Some(token.piece) {
            return Vec::new();
        }
        legal_destinations(token, &self.positions, &self.board, &self.history)
    }

    /// Every game-legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<CandidateMove> {
        legal_moves(self.side_to_move, &self.positions, &self.board, &self.history)
    }

    /// Tries to move the piece named by `token` to `destination`.
    pub fn attempt_move(
        &mut self,
        token: Position,
        destination: Square,
    ) -> Result<MoveOutcome, IllegalMove> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(IllegalMove::PromotionPending);
        }
        if token.color() != self.side_to_move {
            return Err(IllegalMove::NotYourTurn(self.side_to_move));
        }
        if self.board.occupant(token.square) != Some(token.piece) {
            return Err(IllegalMove::NoPieceAtOrigin(token.square));
        }

        let candidate = validate_move(
            token,
            destination,
            &self.positions,
            &self.board,
            &self.history,
        )
        .inspect_err(|reason| debug!(%token, %destination, %reason, "move rejected"))?;

        if candidate.is_promotion() {
            debug!(%token, %destination, "waiting for promotion choice");
            self.pending_promotion = Some(candidate);
            return Ok(MoveOutcome::PromotionRequired {
                color: token.color(),
            });
        }

        Ok(self.commit(candidate))
    }

    /// Completes a pending promotion. Anything other than a knight, bishop,
    /// rook or queen is refused and the promotion stays pending.
    pub fn promote(&mut self, kind: PieceKind) -> Result<MoveOutcome, IllegalMove> {
        let Some(pending) = self.pending_promotion else {
            return Err(IllegalMove::NoPromotionPending);
        };
        if !is_promotion_choice(kind) {
            warn!(%kind, "invalid promotion choice");
            return Err(IllegalMove::InvalidPromotionChoice(kind));
        }
        self.pending_promotion = None;
        Ok(self.commit(pending.with_promotion(kind)))
    }

    /// Drops a pending promotion without moving anything.
    pub fn cancel_promotion(&mut self) -> bool {
        self.pending_promotion.take().is_some()
    }

    /// `color` concedes. A finished game keeps its original result.
    pub fn resign(&mut self, color: Color) -> GameStatus {
        if self.status.is_over() {
            warn!(%color, status = %self.status, "resignation after the game ended");
            return self.status;
        }
        self.pending_promotion = None;
        self.status = GameStatus::Resigned {
            winner: color.opposite(),
        };
        info!(status = %self.status, "game over");
        self.status
    }

    fn commit(&mut self, candidate: CandidateMove) -> MoveOutcome {
        self.positions = simulate(&candidate, &self.positions);
        self.board = Board::build(&self.positions);
        self.history.push(MoveRecord {
            mover: candidate.mover,
            destination: candidate.destination,
        });
        if let Some(victim) = candidate.captured {
            self.captured.record(victim.piece);
        }
        debug!(
            mover = %candidate.mover,
            destination = %candidate.destination,
            capture = candidate.is_capture(),
            "move committed"
        );

        let mover = self.side_to_move;
        self.side_to_move = mover.opposite();
        self.evaluate_after_move(mover)
    }

    fn evaluate_after_move(&mut self, mover: Color) -> MoveOutcome {
        let defender = mover.opposite();

        let (status, outcome) = if self.board.king_square(defender).is_none() {
            error!(%defender, "king was captured; a legality check let it become capturable");
            (
                GameStatus::KingCaptured { winner: mover },
                MoveOutcome::KingCaptured { winner: mover },
            )
        } else {
            let check = is_king_in_check(&self.board, defender);
            let can_move =
                has_any_legal_move(defender, &self.positions, &self.board, &self.history);
            if !can_move && check {
                (
                    GameStatus::Checkmate { winner: mover },
                    MoveOutcome::Checkmate { winner: mover },
                )
            } else if !can_move {
                (GameStatus::Stalemate, MoveOutcome::Stalemate)
            } else if is_repetition_draw(&self.history) {
                (GameStatus::DrawByRepetition, MoveOutcome::DrawByRepetition)
            } else {
                (
                    GameStatus::InProgress {
                        side_to_move: defender,
                    },
                    MoveOutcome::Accepted { check },
                )
            }
        };

        if status.is_over() {
            info!(%status, "game over");
        }
        self.status = status;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn sq(name: &str) -> Square {
        let b = name.as_bytes();
        Square::checked((b[0] - b'a') as i8, (b[1] - b'1') as i8).unwrap()
    }

    fn at(kind: PieceKind, color: Color, name: &str) -> Position {
        Position::new(Piece::new(kind, color), sq(name))
    }

    #[test]
    fn new_game_is_white_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.positions().len(), 32);
        assert!(game.history().is_empty());
        assert!(game.captured().is_empty());
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn setup_rejects_missing_or_extra_kings() {
        let only_white = vec![at(PieceKind::King, Color::White, "e1")];
        assert!(matches!(
            GameState::from_positions(only_white, Color::White),
            Err(ChessErrors::MissingKing(Color::Black))
        ));

        let two_black = vec![
            at(PieceKind::King, Color::White, "e1"),
            at(PieceKind::King, Color::Black, "e8"),
            at(PieceKind::King, Color::Black, "a8"),
        ];
        assert!(matches!(
            GameState::from_positions(two_black, Color::White),
            Err(ChessErrors::DuplicateKing(Color::Black))
        ));
    }

    #[test]
    fn setup_rejects_shared_squares() {
        let positions = vec![
            at(PieceKind::King, Color::White, "e1"),
            at(PieceKind::King, Color::Black, "e8"),
            at(PieceKind::Rook, Color::Black, "e1"),
        ];
        assert_eq!(
            GameState::from_positions(positions, Color::White).unwrap_err(),
            ChessErrors::SquareOccupied(sq("e1"))
        );
    }

    #[test]
    fn wrong_side_and_stale_tokens_are_rejected() {
        let mut game = GameState::new_game();
        assert_eq!(
            game.attempt_move(at(PieceKind::Pawn, Color::Black, "e7"), sq("e5")),
            Err(IllegalMove::NotYourTurn(Color::White))
        );
        assert_eq!(
            game.attempt_move(at(PieceKind::Pawn, Color::White, "e3"), sq("e4")),
            Err(IllegalMove::NoPieceAtOrigin(sq("e3")))
        );
        assert_eq!(
            game.attempt_move(at(PieceKind::Knight, Color::White, "e2"), sq("f4")),
            Err(IllegalMove::NoPieceAtOrigin(sq("e2")))
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn capture_lands_in_the_losers_ledger() {
        let mut game = GameState::new_game();
        let moves = [
            (at(PieceKind::Pawn, Color::White, "e2"), "e4"),
            (at(PieceKind::Pawn, Color::Black, "d7"), "d5"),
            (at(PieceKind::Pawn, Color::White, "e4"), "d5"),
        ];
        for (token, to) in moves {
            game.attempt_move(token, sq(to)).unwrap();
        }
        assert_eq!(game.positions().len(), 31);
        assert_eq!(
            game.captured().lost_by(Color::Black),
            &[Piece::new(PieceKind::Pawn, Color::Black)]
        );
        assert!(game.captured().lost_by(Color::White).is_empty());
    }

    #[test]
    fn resign_ends_the_game_once() {
        let mut game = GameState::new_game();
        assert_eq!(
            game.resign(Color::White),
            GameStatus::Resigned {
                winner: Color::Black
            }
        );
        assert_eq!(
            game.resign(Color::Black),
            GameStatus::Resigned {
                winner: Color::Black
            }
        );
        assert_eq!(
            game.attempt_move(at(PieceKind::Pawn, Color::White, "e2"), sq("e4")),
            Err(IllegalMove::GameOver)
        );
    }

    #[test]
    fn capturable_king_ends_the_game_as_fallback() {
        // Black is in check with White to move: only reachable through a bad setup.
        let positions = vec![
            at(PieceKind::King, Color::White, "e1"),
            at(PieceKind::Rook, Color::White, "e2"),
            at(PieceKind::King, Color::Black, "e8"),
        ];
        let mut game = GameState::from_positions(positions, Color::White).unwrap();
        let outcome = game
            .attempt_move(at(PieceKind::Rook, Color::White, "e2"), sq("e8"))
            .unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::KingCaptured {
                winner: Color::White
            }
        );
        assert!(game.is_over());
    }

    #[test]
    fn stalemate_is_detected_after_the_move() {
        let positions = vec![
            at(PieceKind::King, Color::Black, "a8"),
            at(PieceKind::Queen, Color::White, "b5"),
            at(PieceKind::King, Color::White, "c1"),
        ];
        let mut game = GameState::from_positions(positions, Color::White).unwrap();
        let outcome = game
            .attempt_move(at(PieceKind::Queen, Color::White, "b5"), sq("b6"))
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Stalemate);
        assert_eq!(game.status(), GameStatus::Stalemate);
    }
}
