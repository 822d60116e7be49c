use super::bot_controller::SearchDepth;
use super::types::{BotType, Controller, FirstPlayerMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub controller_x: Controller,
    pub controller_o: Controller,
    pub first_player_mode: FirstPlayerMode,
    pub search_depth: SearchDepth,
}

impl TicTacToeSessionSettings {
    pub fn player_vs_player() -> Self {
        Self {
            controller_x: Controller::Human,
            controller_o: Controller::Human,
            first_player_mode: FirstPlayerMode::Random,
            search_depth: SearchDepth::Full,
        }
    }

    /// Human plays X, the bot plays O.
    pub fn player_vs_ai(bot_type: BotType) -> Self {
        Self {
            controller_o: Controller::Bot(bot_type),
            ..Self::player_vs_player()
        }
    }
}
