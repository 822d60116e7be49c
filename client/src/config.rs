use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::{
    BotType, CELL_COUNT, FirstPlayerMode, Mark, SearchDepth, TicTacToeSessionSettings,
};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(
    file_path: impl Into<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub bot_type: BotType,
    /// `None` searches to the end of the game.
    pub search_depth: Option<usize>,
    pub first_player: FirstPlayerMode,
    pub mark_x: char,
    pub mark_o: char,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_type: BotType::Minimax,
            search_depth: None,
            first_player: FirstPlayerMode::Random,
            mark_x: 'X',
            mark_o: 'O',
            verbose: false,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(depth) = self.search_depth
            && !(1..=CELL_COUNT).contains(&depth)
        {
            return Err(format!(
                "search_depth must be between 1 and {}, got {}",
                CELL_COUNT, depth
            ));
        }
        for (name, glyph) in [("mark_x", self.mark_x), ("mark_o", self.mark_o)] {
            if glyph.is_whitespace() || glyph.is_control() {
                return Err(format!("{} must be a visible character", name));
            }
        }
        if self.mark_x == self.mark_o {
            return Err("mark_x and mark_o must differ".to_string());
        }
        Ok(())
    }
}

impl Config {
    pub fn glyph(&self, mark: Mark) -> char {
        match mark {
            Mark::X => self.mark_x,
            Mark::O => self.mark_o,
            Mark::Empty => ' ',
        }
    }

    pub fn search_depth(&self) -> SearchDepth {
        SearchDepth::from_option(self.search_depth)
    }

    pub fn player_vs_player_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            first_player_mode: self.first_player,
            search_depth: self.search_depth(),
            ..TicTacToeSessionSettings::player_vs_player()
        }
    }

    pub fn player_vs_ai_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            first_player_mode: self.first_player,
            search_depth: self.search_depth(),
            ..TicTacToeSessionSettings::player_vs_ai(self.bot_type)
        }
    }
}
