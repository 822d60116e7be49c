use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, SearchDepth, calculate_move};
use super::settings::TicTacToeSessionSettings;
use super::types::{Controller, FirstPlayerMode, GameStatus, Mark, Position, TerminalResult};

#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub controller_x: Controller,
    pub controller_o: Controller,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub search_depth: SearchDepth,
    first_player_mode: FirstPlayerMode,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSessionSettings, rng: &mut SessionRng) -> Self {
        Self {
            board: Board::new(),
            controller_x: settings.controller_x,
            controller_o: settings.controller_o,
            current_mark: pick_first_mark(settings.first_player_mode, rng),
            status: GameStatus::InProgress,
            last_move: None,
            search_depth: settings.search_depth,
            first_player_mode: settings.first_player_mode,
        }
    }

    /// Starts a new round on the same session.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.board.reset();
        self.current_mark = pick_first_mark(self.first_player_mode, rng);
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn place_mark(&mut self, x: usize, y: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if !Board::is_in_bounds(x, y) {
            return Err("Position out of bounds".to_string());
        }

        if self.board.get_cell(x, y) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.set_cell(x, y, self.current_mark);
        self.last_move = Some(Position::new(x, y));

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    /// Lets the bot owning the current mark move. Returns the placed position,
    /// or `None` when it is a human's turn or no move is left.
    pub fn play_bot_turn(&mut self, rng: &mut SessionRng) -> Result<Option<Position>, String> {
        let Controller::Bot(bot_type) = self.controller_of(self.current_mark) else {
            return Ok(None);
        };
        if self.status != GameStatus::InProgress {
            return Ok(None);
        }

        let Some(pos) = calculate_move(bot_type, BotInput::from_game_state(self), rng) else {
            return Ok(None);
        };

        self.place_mark(pos.x, pos.y)?;
        Ok(Some(pos))
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress
            && matches!(self.controller_of(self.current_mark), Controller::Bot(_))
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn controller_of(&self, mark: Mark) -> Controller {
        match mark {
            Mark::O => self.controller_o,
            _ => self.controller_x,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(line) => Some(line.mark),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn check_game_over(&mut self) {
        self.status = match self.board.check_rules() {
            TerminalResult::Win(line) => GameStatus::Won(line),
            TerminalResult::Tie => GameStatus::Tie,
            TerminalResult::NoResult => GameStatus::InProgress,
        };
    }
}

fn pick_first_mark(mode: FirstPlayerMode, rng: &mut SessionRng) -> Mark {
    match mode {
        FirstPlayerMode::X => Mark::X,
        FirstPlayerMode::O => Mark::O,
        FirstPlayerMode::Random => {
            if rng.random_bool() {
                Mark::X
            } else {
                Mark::O
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{BotType, WinningLine};

    fn pvp(first: FirstPlayerMode) -> TicTacToeGameState {
        let settings = TicTacToeSessionSettings {
            first_player_mode: first,
            ..TicTacToeSessionSettings::player_vs_player()
        };
        TicTacToeGameState::new(&settings, &mut SessionRng::new(1))
    }

    #[test]
    fn test_first_player_mode_fixed() {
        assert_eq!(pvp(FirstPlayerMode::X).current_mark, Mark::X);
        assert_eq!(pvp(FirstPlayerMode::O).current_mark, Mark::O);
    }

    #[test]
    fn test_first_player_random_is_seeded() {
        let settings = TicTacToeSessionSettings::player_vs_player();
        let first = |seed| TicTacToeGameState::new(&settings, &mut SessionRng::new(seed)).current_mark;
        for seed in 0..10 {
            assert_eq!(first(seed), first(seed));
        }
    }

    #[test]
    fn test_place_mark_switches_turn() {
        let mut state = pvp(FirstPlayerMode::X);
        assert!(state.place_mark(1, 1).is_ok());
        assert_eq!(state.board.get_cell(1, 1), Mark::X);
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_place_mark_rejects_occupied_cell() {
        let mut state = pvp(FirstPlayerMode::X);
        state.place_mark(0, 0).unwrap();
        let result = state.place_mark(0, 0);
        assert_eq!(result, Err("Cell is already marked".to_string()));
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.board.get_cell(0, 0), Mark::X);
    }

    #[test]
    fn test_place_mark_rejects_out_of_bounds() {
        let mut state = pvp(FirstPlayerMode::X);
        assert_eq!(state.place_mark(3, 0), Err("Position out of bounds".to_string()));
        assert_eq!(state.place_mark(0, 7), Err("Position out of bounds".to_string()));
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = pvp(FirstPlayerMode::X);
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            state.place_mark(x, y).unwrap();
        }
        assert_eq!(
            state.status,
            GameStatus::Won(WinningLine::new(Mark::X, Position::new(0, 0), Position::new(2, 0)))
        );
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.place_mark(2, 2), Err("Game is already over".to_string()));
    }

    #[test]
    fn test_tie_ends_game() {
        let mut state = pvp(FirstPlayerMode::X);
        // X O X / X O O / O X X
        for (x, y) in [(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)] {
            state.place_mark(x, y).unwrap();
        }
        assert_eq!(state.status, GameStatus::Tie);
        assert_eq!(state.winner(), None);
        assert!(state.is_over());
    }

    #[test]
    fn test_reset_starts_new_round() {
        let mut rng = SessionRng::new(3);
        let mut state = pvp(FirstPlayerMode::O);
        state.place_mark(0, 0).unwrap();
        state.reset(&mut rng);
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_bot_turn_skipped_for_human() {
        let mut state = pvp(FirstPlayerMode::X);
        assert!(!state.is_bot_turn());
        assert_eq!(state.play_bot_turn(&mut SessionRng::new(0)), Ok(None));
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_bot_blocks_human_line() {
        let mut rng = SessionRng::new(5);
        let settings = TicTacToeSessionSettings {
            first_player_mode: FirstPlayerMode::X,
            ..TicTacToeSessionSettings::player_vs_ai(BotType::Minimax)
        };
        let mut state = TicTacToeGameState::new(&settings, &mut rng);

        state.place_mark(0, 0).unwrap();
        assert!(state.is_bot_turn());
        // Any reply other than the centre loses against a corner opening.
        assert_eq!(state.play_bot_turn(&mut rng), Ok(Some(Position::new(1, 1))));

        state.place_mark(1, 0).unwrap();
        assert_eq!(state.play_bot_turn(&mut rng), Ok(Some(Position::new(2, 0))));
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_bot_vs_bot_minimax_is_tie() {
        let mut rng = SessionRng::new(11);
        let settings = TicTacToeSessionSettings {
            controller_x: Controller::Bot(BotType::Minimax),
            ..TicTacToeSessionSettings::player_vs_ai(BotType::Minimax)
        };
        let mut state = TicTacToeGameState::new(&settings, &mut rng);
        while state.is_bot_turn() {
            assert!(state.play_bot_turn(&mut rng).unwrap().is_some());
        }
        assert_eq!(state.status, GameStatus::Tie);
    }
}
