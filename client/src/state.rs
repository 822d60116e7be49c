use clap::ValueEnum;
use tictactoe_common::games::tictactoe::WinningLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    #[value(name = "pvp")]
    PlayerVsPlayer,
    #[value(name = "pvai")]
    PlayerVsAi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Playing(GameMode),
    PlayerWon(WinningLine),
    Tie,
    Quit,
}
