mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use bot_controller::{
    BotInput, LOSS_SCORE, REFERENCE_SEARCH_DEPTH, SearchDepth, SearchResult, TIE_SCORE, WIN_SCORE,
    calculate_minimax_move, calculate_move, evaluate, evaluate_with_depth,
};
pub use game_state::TicTacToeGameState;
pub use settings::TicTacToeSessionSettings;
pub use types::{
    BotType, Controller, FirstPlayerMode, GameStatus, Mark, Position, TerminalResult, WinningLine,
};
pub use win_detector::{check_rules, check_win, check_win_with_line};
