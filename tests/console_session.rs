use std::io::Cursor;

use plum_referee::console::console_top::run_loop;
use plum_referee::game_state::chess_types::Color;
use plum_referee::game_state::game_state::GameState;
use plum_referee::utils::piece_token::parse_piece_token;
use plum_referee::utils::render_game_state::BoardStyle;

fn session(game: GameState, script: &str) -> String {
    let mut out = Vec::new();
    run_loop(Cursor::new(script.as_bytes()), &mut out, game, BoardStyle::Ascii)
        .expect("console session should not fail on in-memory io");
    String::from_utf8(out).expect("console output is utf-8")
}

#[test]
fn promotion_reprompts_until_a_valid_piece_is_given() {
    let positions = ["Pa7", "Ke1", "kh5"]
        .into_iter()
        .map(|token| parse_piece_token(token).unwrap())
        .collect();
    let game = GameState::from_positions(positions, Color::White).unwrap();

    let text = session(game, "Pa7 a8\nKing\ndragon\nq\nmoves\nquit\n");

    assert!(text.contains("Promote your pawn on a8"));
    assert!(text.contains("cannot promote to a King"));
    assert!(text.contains("Invalid piece type. Please select again."));
    assert!(text.contains("8 Q . . . . . . . 8"));
    assert!(text.contains("1. Pa7 a8"));
    assert!(text.contains("Thanks for playing"));
}

#[test]
fn captured_command_lists_lost_pieces() {
    let text = session(
        GameState::new_game(),
        "Pe2 e4\npd7 d5\nPe4 d5\ncaptured\nq\n",
    );
    assert!(text.contains("White lost: -"));
    assert!(text.contains("Black lost: p"));
}

#[test]
fn help_and_blank_lines_do_not_change_the_turn() {
    let text = session(GameState::new_game(), "\nhelp\n\nboard\nq\n");
    assert!(text.contains("legal <piece>"));
    assert!(!text.contains("Black player, enter your next move"));
}

#[test]
fn unparseable_input_points_at_help() {
    let text = session(GameState::new_game(), "castle please\nq\n");
    assert!(text.contains("Type `help` for the move format."));
}
