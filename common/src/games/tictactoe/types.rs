use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }

    /// All three cells covered by the line, from `start` to `end`.
    pub fn cells(&self) -> [Position; 3] {
        let step = |from: usize, to: usize| to as isize - from as isize;
        let dx = step(self.start.x, self.end.x) / 2;
        let dy = step(self.start.y, self.end.y) / 2;
        let middle = Position::new(
            self.start.x.wrapping_add_signed(dx),
            self.start.y.wrapping_add_signed(dy),
        );
        [self.start, middle, self.end]
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}

/// Outcome of a rules check on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalResult {
    NoResult,
    Win(WinningLine),
    Tie,
}

impl TerminalResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalResult::NoResult)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(WinningLine),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Random,
    X,
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    #[default]
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Bot(BotType),
}
