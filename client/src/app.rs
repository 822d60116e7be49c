use std::io::{BufRead, Write};

use tictactoe_common::debug_log;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Controller, GameStatus, TicTacToeGameState, WinningLine};

use crate::config::Config;
use crate::demo::MenuDemo;
use crate::input::{GameCommand, MenuChoice, parse_game_command, parse_menu_choice};
use crate::state::{AppState, GameMode};
use crate::ui::{MENU_TEXT, render_board};

/// Terminal front end: menu, the two play modes and the result screens.
pub struct App<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: Config,
    rng: SessionRng,
    demo: MenuDemo,
    state: AppState,
    mode: GameMode,
    game: Option<TicTacToeGameState>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, config: Config, rng: SessionRng) -> Self {
        let demo = MenuDemo::new(SessionRng::new(rng.seed().wrapping_add(1)));
        Self {
            input,
            output,
            config,
            rng,
            demo,
            state: AppState::Menu,
            mode: GameMode::PlayerVsPlayer,
            game: None,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn game(&self) -> Option<&TicTacToeGameState> {
        self.game.as_ref()
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn start(&mut self, mode: GameMode) -> Result<(), String> {
        let settings = match mode {
            GameMode::PlayerVsPlayer => self.config.player_vs_player_settings(),
            GameMode::PlayerVsAi => self.config.player_vs_ai_settings(),
        };
        let game = TicTacToeGameState::new(&settings, &mut self.rng);
        debug_log!("Starting {:?}, {:?} moves first", mode, game.current_mark);

        let glyph = self.config.glyph(game.current_mark);
        self.game = Some(game);
        self.mode = mode;
        self.state = AppState::Playing(mode);
        self.write(&format!("\nNew game. {} moves first.\n", glyph))
    }

    pub fn run(&mut self) -> Result<(), String> {
        while self.state != AppState::Quit {
            self.step()?;
        }
        self.write("Bye!\n")
    }

    fn step(&mut self) -> Result<(), String> {
        match self.state {
            AppState::Menu => self.update_menu(),
            AppState::Playing(_) => self.update_game(),
            AppState::PlayerWon(line) => self.update_result_screen(Some(line)),
            AppState::Tie => self.update_result_screen(None),
            AppState::Quit => Ok(()),
        }
    }

    fn update_menu(&mut self) -> Result<(), String> {
        self.demo.advance();
        let demo_text = render_board(self.demo.board(), &self.config, None);
        self.write(MENU_TEXT)?;
        self.write(&demo_text)?;
        self.write("> ")?;

        let Some(line) = self.read_line()? else {
            self.state = AppState::Quit;
            return Ok(());
        };

        match parse_menu_choice(&line) {
            Ok(MenuChoice::PlayerVsPlayer) => self.start(GameMode::PlayerVsPlayer),
            Ok(MenuChoice::PlayerVsAi) => self.start(GameMode::PlayerVsAi),
            Ok(MenuChoice::Quit) => {
                self.state = AppState::Quit;
                Ok(())
            }
            Err(e) => self.write(&format!("{}\n", e)),
        }
    }

    fn update_game(&mut self) -> Result<(), String> {
        let Some(game) = self.game.as_ref() else {
            self.state = AppState::Menu;
            return Ok(());
        };

        if game.is_bot_turn() {
            return self.play_bot_turn();
        }

        let board_text = render_board(&game.board, &self.config, None);
        let glyph = self.config.glyph(game.current_mark);
        self.write(&board_text)?;
        self.write(&format!(
            "Player {}, your move (col row, or 1-9; q for menu): ",
            glyph
        ))?;

        let Some(line) = self.read_line()? else {
            self.state = AppState::Quit;
            return Ok(());
        };

        match parse_game_command(&line) {
            Ok(GameCommand::BackToMenu) => {
                self.state = AppState::Menu;
                Ok(())
            }
            Ok(GameCommand::Place(pos)) => {
                let placed = match self.game.as_mut() {
                    Some(game) => game.place_mark(pos.x, pos.y),
                    None => Ok(()),
                };
                match placed {
                    Ok(()) => {
                        self.after_move();
                        Ok(())
                    }
                    Err(e) => self.write(&format!("{}\n", e)),
                }
            }
            Err(e) => self.write(&format!("{}\n", e)),
        }
    }

    fn play_bot_turn(&mut self) -> Result<(), String> {
        let Some(game) = self.game.as_mut() else {
            return Ok(());
        };

        let mark = game.current_mark;
        let Some(pos) = game.play_bot_turn(&mut self.rng)? else {
            self.state = AppState::Menu;
            return self.write("The AI has no move to play.\n");
        };

        let glyph = self.config.glyph(mark);
        self.write(&format!("AI ({}) plays {} {}\n", glyph, pos.x, pos.y))?;
        self.after_move();
        Ok(())
    }

    fn after_move(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };

        match game.status {
            GameStatus::Won(line) => self.state = AppState::PlayerWon(line),
            GameStatus::Tie => self.state = AppState::Tie,
            GameStatus::InProgress => {}
        }
    }

    fn update_result_screen(&mut self, line: Option<WinningLine>) -> Result<(), String> {
        let Some(game) = self.game.as_ref() else {
            self.state = AppState::Menu;
            return Ok(());
        };

        let board_text = render_board(&game.board, &self.config, line.as_ref());
        let message = match line {
            Some(line) => {
                let winner = match game.controller_of(line.mark) {
                    Controller::Bot(_) => "The AI".to_string(),
                    Controller::Human => format!("Player {}", self.config.glyph(line.mark)),
                };
                format!("{} wins!", winner)
            }
            None => "It's a tie!".to_string(),
        };

        self.write(&board_text)?;
        self.write(&format!("{}\nPress Enter for the menu, r to play again: ", message))?;

        let Some(input) = self.read_line()? else {
            self.state = AppState::Quit;
            return Ok(());
        };

        if input.trim().eq_ignore_ascii_case("r") {
            if let Some(game) = self.game.as_mut() {
                game.reset(&mut self.rng);
            }
            self.state = AppState::Playing(self.mode);
        } else {
            self.state = AppState::Menu;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        Ok((read > 0).then_some(line))
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }
}
