//! Two-player console front-end and command loop.
//!
//! Reads one command per line, routes moves to the game state tracker and
//! prints the board, rejections and the final result. Both players share the
//! same terminal and take turns typing moves such as `Pe2 e4`.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::game_state::chess_types::Color;
use crate::game_state::game_outcome::MoveOutcome;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::piece_token::{parse_move_command, parse_piece_kind, parse_piece_token, piece_token};
use crate::utils::render_game_state::{render_board, render_pieces, BoardStyle};

const HELP_TEXT: &str = "\
Enter moves as <piece><square> <destination>, e.g. `Pe2 e4` or `ng8 f6`.
Upper-case letters are White pieces, lower-case letters are Black pieces.
Castle by moving the king two squares, e.g. `Ke1 g1`.
Commands:
  moves           list the moves played so far
  captured        list captured pieces
  legal <piece>   list legal destinations, e.g. `legal Ng1`
  board           show the board again
  resign          the side to move resigns
  help            show this text
  quit | q        leave the game";

/// Play a game on stdin/stdout.
pub fn run_stdio_loop(style: BoardStyle) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(stdin.lock(), &mut stdout, GameState::new_game(), style)
}

/// Play `game` reading commands from `input` until the game ends, the
/// players quit, or input runs out.
pub fn run_loop(
    input: impl BufRead,
    out: &mut impl Write,
    game: GameState,
    style: BoardStyle,
) -> io::Result<()> {
    let mut console = ConsoleState::new(game, style);
    console.show_position(out)?;
    console.prompt(out)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, out)?;
        if should_quit {
            out.flush()?;
            break;
        }
        console.prompt(out)?;
        out.flush()?;
    }

    Ok(())
}

struct ConsoleState {
    game: GameState,
    style: BoardStyle,
}

impl ConsoleState {
    fn new(game: GameState, style: BoardStyle) -> Self {
        Self { game, style }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        debug!(command = trimmed, "console input");

        if self.game.pending_promotion().is_some() {
            return self.handle_promotion_choice(trimmed, out);
        }

        let mut parts = trimmed.split_whitespace();
        let command = parts.next().unwrap_or_default();

        match command.to_ascii_lowercase().as_str() {
            "quit" | "q" => {
                writeln!(out, "Thanks for playing")?;
                return Ok(true);
            }
            "help" | "rules" => {
                writeln!(out, "{HELP_TEXT}")?;
            }
            "board" => {
                self.show_position(out)?;
            }
            "moves" => {
                self.show_moves(out)?;
            }
            "captured" => {
                self.show_captured(out)?;
            }
            "legal" => {
                let token = parts.next().unwrap_or_default();
                self.show_legal(token, out)?;
            }
            "resign" => {
                let status = self.game.resign(self.game.side_to_move());
                return self.finish(&status.to_string(), out);
            }
            _ => {
                return self.handle_move(trimmed, out);
            }
        }

        Ok(false)
    }

    fn handle_move(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let (token, destination) = match parse_move_command(line) {
            Ok(parsed) => parsed,
            Err(err) => {
                writeln!(out, "{err}. Type `help` for the move format.")?;
                return Ok(false);
            }
        };

        let side = self.game.side_to_move();
        if token.color() != side {
            writeln!(out, "Invalid piece for {side} player!")?;
            return Ok(false);
        }

        match self.game.attempt_move(token, destination) {
            Ok(outcome) => self.report_outcome(outcome, out),
            Err(reason) => {
                writeln!(out, "Illegal move: {reason}")?;
                Ok(false)
            }
        }
    }

    fn handle_promotion_choice(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        if line.eq_ignore_ascii_case("cancel") {
            self.game.cancel_promotion();
            writeln!(out, "Promotion cancelled")?;
            return Ok(false);
        }
        // `q` names the queen here, so only the full word quits.
        if line.eq_ignore_ascii_case("quit") {
            self.game.cancel_promotion();
            writeln!(out, "Thanks for playing")?;
            return Ok(true);
        }

        let Some(kind) = parse_piece_kind(line) else {
            writeln!(out, "Invalid piece type. Please select again.")?;
            return Ok(false);
        };
        match self.game.promote(kind) {
            Ok(outcome) => self.report_outcome(outcome, out),
            Err(reason) => {
                writeln!(out, "{reason}")?;
                Ok(false)
            }
        }
    }

    fn report_outcome(&mut self, outcome: MoveOutcome, out: &mut impl Write) -> io::Result<bool> {
        if let MoveOutcome::PromotionRequired { .. } = outcome {
            return Ok(false);
        }

        self.show_position(out)?;
        match outcome {
            MoveOutcome::Accepted { check: true } => {
                writeln!(out, "{} is in check", self.game.side_to_move())?;
                Ok(false)
            }
            MoveOutcome::Accepted { check: false } | MoveOutcome::PromotionRequired { .. } => {
                Ok(false)
            }
            _ => {
                let status = self.game.status().to_string();
                self.finish(&status, out)
            }
        }
    }

    fn finish(&self, result: &str, out: &mut impl Write) -> io::Result<bool> {
        let elapsed = self.game.elapsed();
        let seconds = elapsed.num_seconds().max(0);
        writeln!(out, "{result}")?;
        writeln!(
            out,
            "Game started {} and lasted {}:{:02} over {} half-moves",
            self.game.started_at().format("%Y-%m-%d %H:%M:%S"),
            seconds / 60,
            seconds % 60,
            self.game.history().len()
        )?;
        writeln!(out, "Thanks for playing!")?;
        Ok(true)
    }

    fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(pending) = self.game.pending_promotion() {
            writeln!(
                out,
                "Promote your pawn on {}. Enter the piece type (Q, R, B or N):",
                square_to_algebraic(pending.destination)
            )
        } else {
            write!(out, "{} player, enter your next move: ", self.game.side_to_move())
        }
    }

    fn show_position(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_board(self.game.board(), self.style))?;
        writeln!(out, "It's the {} player's turn", self.game.side_to_move())
    }

    fn show_moves(&self, out: &mut impl Write) -> io::Result<()> {
        if self.game.history().is_empty() {
            return writeln!(out, "No moves yet");
        }
        for (ply, pair) in self.game.history().chunks(2).enumerate() {
            let moves: Vec<String> = pair
                .iter()
                .map(|record| {
                    format!(
                        "{} {}",
                        piece_token(record.mover),
                        square_to_algebraic(record.destination)
                    )
                })
                .collect();
            writeln!(out, "{}. {}", ply + 1, moves.join("  "))?;
        }
        Ok(())
    }

    fn show_captured(&self, out: &mut impl Write) -> io::Result<()> {
        let captured = self.game.captured();
        for color in [Color::White, Color::Black] {
            writeln!(
                out,
                "{color} lost: {}",
                render_pieces(captured.lost_by(color), self.style)
            )?;
        }
        Ok(())
    }

    fn show_legal(&self, token: &str, out: &mut impl Write) -> io::Result<()> {
        let position = match parse_piece_token(token) {
            Ok(position) => position,
            Err(err) => return writeln!(out, "{err}"),
        };
        let destinations: Vec<String> = self
            .game
            .legal_destinations(position)
            .into_iter()
            .map(square_to_algebraic)
            .collect();
        if destinations.is_empty() {
            writeln!(out, "{token} has no legal moves")
        } else {
            writeln!(out, "{token}: {}", destinations.join(" "))
        }
    }
}
