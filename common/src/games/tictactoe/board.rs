use std::fmt;

use super::types::{Mark, Position, TerminalResult};
use super::win_detector::check_rules;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 grid of marks, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_rows(rows: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &mark) in row.iter().enumerate() {
                board.set_cell(x, y, mark);
            }
        }
        board
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    /// Overwrites the cell unconditionally. Callers check emptiness first.
    pub fn set_cell(&mut self, x: usize, y: usize, mark: Mark) {
        let index = Self::index(x, y);
        self.cells[index] = mark;
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Mark {
        self.cells[Self::index(x, y)]
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.get_cell(pos.x, pos.y)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Mark::Empty).count()
    }

    pub fn check_rules(&self) -> TerminalResult {
        check_rules(self)
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if self.get_cell(x, y) == Mark::Empty {
                    moves.push(Position::new(x, y));
                }
            }
        }
        moves
    }

    pub fn is_in_bounds(x: usize, y: usize) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE
    }

    fn index(x: usize, y: usize) -> usize {
        assert!(
            Self::is_in_bounds(x, y),
            "cell ({}, {}) is outside the {}x{} board",
            x,
            y,
            BOARD_SIZE,
            BOARD_SIZE
        );
        y * BOARD_SIZE + x
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            let row: String = (0..BOARD_SIZE)
                .map(|x| self.get_cell(x, y).symbol())
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
