use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Position, WinningLine};

use crate::config::Config;

pub const MENU_TEXT: &str = "\
=== Tic-Tac-Toe ===
1) Player vs Player
2) Player vs AI
q) Quit
";

/// Draws the grid with column/row indices; cells on `highlight` are bracketed.
pub fn render_board(board: &Board, config: &Config, highlight: Option<&WinningLine>) -> String {
    let mut out = String::new();

    out.push_str("  ");
    for x in 0..BOARD_SIZE {
        out.push_str(&format!(" {}  ", x));
    }
    out.push('\n');

    for y in 0..BOARD_SIZE {
        if y > 0 {
            out.push_str("  ");
            out.push_str(&vec!["---"; BOARD_SIZE].join("+"));
            out.push('\n');
        }

        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|x| {
                let glyph = config.glyph(board.get_cell(x, y));
                let on_line = highlight.is_some_and(|line| line.contains(Position::new(x, y)));
                if on_line {
                    format!("[{}]", glyph)
                } else {
                    format!(" {} ", glyph)
                }
            })
            .collect();
        out.push_str(&format!("{} {}\n", y, cells.join("|")));
    }

    out
}
