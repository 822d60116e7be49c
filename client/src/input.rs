use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PlayerVsPlayer,
    PlayerVsAi,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Place(Position),
    BackToMenu,
}

pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, String> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" | "pvp" => Ok(MenuChoice::PlayerVsPlayer),
        "2" | "pvai" | "ai" => Ok(MenuChoice::PlayerVsAi),
        "q" | "quit" | "exit" => Ok(MenuChoice::Quit),
        other => Err(format!("Unknown option '{}'", other)),
    }
}

/// Accepts `col row`, `col,row` (0-based) or a keypad digit `1`-`9`, counted row by row.
pub fn parse_game_command(line: &str) -> Result<GameCommand, String> {
    let line = line.trim();

    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("menu") {
        return Ok(GameCommand::BackToMenu);
    }

    parse_move(line).map(GameCommand::Place)
}

pub fn parse_move(line: &str) -> Result<Position, String> {
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let pos = match parts.as_slice() {
        [digit] => {
            let n: usize = digit
                .parse()
                .map_err(|_| format!("Invalid move '{}'", line))?;
            if !(1..=BOARD_SIZE * BOARD_SIZE).contains(&n) {
                return Err(format!("Cell number must be between 1 and {}", BOARD_SIZE * BOARD_SIZE));
            }
            Position::new((n - 1) % BOARD_SIZE, (n - 1) / BOARD_SIZE)
        }
        [x, y] => {
            let x: usize = x.parse().map_err(|_| format!("Invalid column '{}'", x))?;
            let y: usize = y.parse().map_err(|_| format!("Invalid row '{}'", y))?;
            Position::new(x, y)
        }
        _ => return Err(format!("Invalid move '{}'", line)),
    };

    if !Board::is_in_bounds(pos.x, pos.y) {
        return Err("Position out of bounds".to_string());
    }

    Ok(pos)
}
