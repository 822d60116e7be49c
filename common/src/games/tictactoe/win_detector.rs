use super::board::{BOARD_SIZE, Board};
use super::types::{Mark, Position, TerminalResult, WinningLine};

const LAST: usize = BOARD_SIZE - 1;

/// Rows, then columns, then the two diagonals; the first completed line wins.
pub fn check_rules(board: &Board) -> TerminalResult {
    if let Some(line) = check_win_with_line(board) {
        return TerminalResult::Win(line);
    }

    if board.is_full() {
        TerminalResult::Tie
    } else {
        TerminalResult::NoResult
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    check_horizontal(board)
        .or_else(|| check_vertical(board))
        .or_else(|| check_diagonal_down_right(board))
        .or_else(|| check_diagonal_down_left(board))
}

fn check_horizontal(board: &Board) -> Option<WinningLine> {
    for y in 0..BOARD_SIZE {
        let mark = board.get_cell(0, y);
        if mark == Mark::Empty {
            continue;
        }
        if (1..BOARD_SIZE).all(|x| board.get_cell(x, y) == mark) {
            return Some(WinningLine::new(mark, Position::new(0, y), Position::new(LAST, y)));
        }
    }
    None
}

fn check_vertical(board: &Board) -> Option<WinningLine> {
    for x in 0..BOARD_SIZE {
        let mark = board.get_cell(x, 0);
        if mark == Mark::Empty {
            continue;
        }
        if (1..BOARD_SIZE).all(|y| board.get_cell(x, y) == mark) {
            return Some(WinningLine::new(mark, Position::new(x, 0), Position::new(x, LAST)));
        }
    }
    None
}

fn check_diagonal_down_right(board: &Board) -> Option<WinningLine> {
    let mark = board.get_cell(1, 1);
    if mark != Mark::Empty && board.get_cell(0, 0) == mark && board.get_cell(LAST, LAST) == mark {
        return Some(WinningLine::new(mark, Position::new(0, 0), Position::new(LAST, LAST)));
    }
    None
}

fn check_diagonal_down_left(board: &Board) -> Option<WinningLine> {
    let mark = board.get_cell(1, 1);
    if mark != Mark::Empty && board.get_cell(LAST, 0) == mark && board.get_cell(0, LAST) == mark {
        return Some(WinningLine::new(mark, Position::new(LAST, 0), Position::new(0, LAST)));
    }
    None
}
