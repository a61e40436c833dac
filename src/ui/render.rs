//! Plain-text frame building for the console. Everything here returns
//! strings so rendering stays testable and free of terminal state.

use crate::game::{Cell, Coord, GameOutcome, GameState, Score, SIZE};

const SEPARATOR: &str = "-------------------";

/// The board grid with coordinate labels, followed by the turn and score
/// block. Legal moves for the current player are marked `*` when
/// `show_hints` is set.
pub fn board_text(state: &GameState, show_hints: bool) -> String {
    let mut out = String::new();

    out.push_str("   a b c d e f g h\n");
    for row in 0..SIZE {
        let mut line = format!("{}| ", row + 1);
        for coord in (0..SIZE).filter_map(|col| Coord::new(row, col)) {
            let glyph = match state.board().get(coord) {
                Cell::Black => '●',
                Cell::White => '○',
                Cell::Empty if show_hints && state.is_legal(coord) => '*',
                Cell::Empty => '.',
            };
            line.push(glyph);
            line.push(' ');
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let Score { black, white } = state.score();
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!("Current Player: {}\n", state.current_player().glyph()));
    out.push_str(&format!("● : {black} | ○ : {white}\n"));
    out.push_str(SEPARATOR);
    out.push('\n');

    out
}

/// The end-of-game banner: final counts and the verdict.
pub fn game_over_text(score: Score, outcome: GameOutcome) -> String {
    let mut out = String::new();
    out.push_str("Game Over\n");
    out.push_str(&format!("Black: {} | White: {}\n", score.black, score.white));
    match outcome {
        GameOutcome::Winner(player) => out.push_str(&format!("{} wins!\n", player.name())),
        GameOutcome::Draw => out.push_str("It's a tie!\n"),
    }
    out
}
