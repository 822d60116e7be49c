use crate::games::SessionRng;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::{BotType, Mark, Position, TerminalResult};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const TIE_SCORE: i32 = 0;

/// Six plies: less than a full game when searched from an empty board.
pub const REFERENCE_SEARCH_DEPTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDepth {
    #[default]
    Full,
    Limited(usize),
}

impl SearchDepth {
    pub fn from_option(depth: Option<usize>) -> Self {
        match depth {
            Some(depth) => SearchDepth::Limited(depth),
            None => SearchDepth::Full,
        }
    }

    pub fn resolve(&self, board: &Board) -> usize {
        match self {
            SearchDepth::Full => board.empty_count(),
            SearchDepth::Limited(depth) => *depth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Position>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
    pub search_depth: SearchDepth,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            current_mark: state.current_mark,
            search_depth: state.search_depth,
        }
    }
}

pub fn calculate_move(bot_type: BotType, input: BotInput, rng: &mut SessionRng) -> Option<Position> {
    if input.board.check_rules().is_terminal() {
        return None;
    }

    match bot_type {
        BotType::Random => calculate_random_move(&input, rng),
        BotType::Minimax => calculate_minimax_move(&input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<Position> {
    if input.current_mark == Mark::Empty {
        return None;
    }
    let depth = input.search_depth.resolve(&input.board);
    let result = evaluate_with_depth(&input.board, input.current_mark, depth);

    crate::debug_log!(
        "Minimax for {:?} (depth {}): score {}, move {:?}\n{}",
        input.current_mark,
        depth,
        result.score,
        result.best_move,
        input.board
    );

    result.best_move
}

/// Full-lookahead search for `maximizing_mark`, which moves next.
pub fn evaluate(board: &Board, maximizing_mark: Mark) -> SearchResult {
    evaluate_with_depth(board, maximizing_mark, board.empty_count())
}

/// Searches at most `depth` plies. The caller's board is never touched.
pub fn evaluate_with_depth(board: &Board, maximizing_mark: Mark, depth: usize) -> SearchResult {
    let mut scratch = *board;
    minimax(&mut scratch, depth, true, maximizing_mark)
}

fn minimax(board: &mut Board, depth: usize, is_maximizing: bool, maximizing_mark: Mark) -> SearchResult {
    match board.check_rules() {
        TerminalResult::Win(line) if line.mark == maximizing_mark => {
            return SearchResult::leaf(WIN_SCORE);
        }
        TerminalResult::Win(_) => return SearchResult::leaf(LOSS_SCORE),
        TerminalResult::Tie => return SearchResult::leaf(TIE_SCORE),
        TerminalResult::NoResult => {}
    }

    if depth == 0 {
        return SearchResult::leaf(TIE_SCORE);
    }

    let Some(minimizing_mark) = maximizing_mark.opponent() else {
        return SearchResult::leaf(TIE_SCORE);
    };
    let mover = if is_maximizing { maximizing_mark } else { minimizing_mark };

    let mut best = SearchResult::leaf(if is_maximizing { i32::MIN } else { i32::MAX });

    for pos in board.available_moves() {
        board.set_cell(pos.x, pos.y, mover);
        let score = minimax(board, depth - 1, !is_maximizing, maximizing_mark).score;
        board.set_cell(pos.x, pos.y, Mark::Empty);

        let improves = if is_maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = SearchResult {
                score,
                best_move: Some(pos),
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn self_play(mut board: Board, mut mark: Mark) -> TerminalResult {
        loop {
            let result = board.check_rules();
            if result.is_terminal() {
                return result;
            }
            let Some(pos) = evaluate(&board, mark).best_move else {
                return result;
            };
            assert_eq!(board.get(pos), Mark::Empty);
            board.set_cell(pos.x, pos.y, mark);
            mark = mark.opponent().unwrap();
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let result = evaluate(&board, X);
        assert_eq!(result.best_move, Some(Position::new(2, 0)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_completes_own_line_as_o() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [X, E, E]]);
        let result = evaluate(&board, O);
        assert_eq!(result.best_move, Some(Position::new(2, 1)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_opponent_line() {
        let board = Board::from_rows([[X, X, E], [E, O, E], [E, E, E]]);
        let result = evaluate(&board, O);
        assert_eq!(result.best_move, Some(Position::new(2, 0)));
        assert_eq!(result.score, TIE_SCORE);
    }

    #[test]
    fn test_lost_position_scores_loss() {
        // X threatens both (2,0) and (0,2); O can block only one.
        let board = Board::from_rows([[X, X, E], [X, O, E], [E, E, O]]);
        let result = evaluate(&board, O);
        assert_eq!(result.score, LOSS_SCORE);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_does_not_mutate_board() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let before = board;
        let _ = evaluate(&board, X);
        let _ = evaluate_with_depth(&board, O, REFERENCE_SEARCH_DEPTH);
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = Board::from_rows([[O, O, O], [X, X, E], [E, E, E]]);
        assert_eq!(
            evaluate(&won, O),
            SearchResult {
                score: WIN_SCORE,
                best_move: None
            }
        );
        assert_eq!(evaluate(&won, X).score, LOSS_SCORE);

        let full = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(
            evaluate(&full, X),
            SearchResult {
                score: TIE_SCORE,
                best_move: None
            }
        );
    }

    #[test]
    fn test_zero_depth_returns_no_move() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(
            evaluate_with_depth(&board, X, 0),
            SearchResult {
                score: TIE_SCORE,
                best_move: None
            }
        );
    }

    #[test]
    fn test_first_candidate_wins_ties() {
        // Every opening move draws under optimal play, so the first empty cell is kept.
        let result = evaluate(&Board::new(), X);
        assert_eq!(result.score, TIE_SCORE);
        assert_eq!(result.best_move, Some(Position::new(0, 0)));
    }

    #[test]
    fn test_self_play_from_empty_board_is_tie_x_first() {
        assert_eq!(self_play(Board::new(), X), TerminalResult::Tie);
    }

    #[test]
    fn test_self_play_from_empty_board_is_tie_o_first() {
        assert_eq!(self_play(Board::new(), O), TerminalResult::Tie);
    }

    #[test]
    fn test_self_play_after_every_opening_is_tie() {
        for pos in Board::new().available_moves() {
            let mut board = Board::new();
            board.set_cell(pos.x, pos.y, X);
            assert_eq!(self_play(board, O), TerminalResult::Tie, "opening {:?}", pos);
        }
    }

    #[test]
    fn test_search_depth_resolve() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        assert_eq!(SearchDepth::Full.resolve(&board), 7);
        assert_eq!(SearchDepth::Limited(3).resolve(&board), 3);
        assert_eq!(SearchDepth::from_option(None), SearchDepth::Full);
        assert_eq!(SearchDepth::from_option(Some(6)), SearchDepth::Limited(6));
    }

    #[test]
    fn test_calculate_move_minimax_wins() {
        let mut rng = SessionRng::new(7);
        let input = BotInput {
            board: Board::from_rows([[O, E, X], [E, O, X], [E, E, E]]),
            current_mark: O,
            search_depth: SearchDepth::Limited(REFERENCE_SEARCH_DEPTH),
        };
        assert_eq!(
            calculate_move(BotType::Minimax, input, &mut rng),
            Some(Position::new(2, 2))
        );
    }

    #[test]
    fn test_calculate_move_random_picks_empty_cell() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [O, X, E]]);
        let mut rng = SessionRng::new(42);
        for _ in 0..50 {
            let input = BotInput {
                board,
                current_mark: X,
                search_depth: SearchDepth::Full,
            };
            let pos = calculate_move(BotType::Random, input, &mut rng).unwrap();
            assert_eq!(board.get(pos), Mark::Empty);
        }
    }

    #[test]
    fn test_calculate_move_random_is_reproducible() {
        let board = Board::new();
        let pick = |seed: u64| {
            let mut rng = SessionRng::new(seed);
            (0..5)
                .map(|_| {
                    let input = BotInput {
                        board,
                        current_mark: O,
                        search_depth: SearchDepth::Full,
                    };
                    calculate_move(BotType::Random, input, &mut rng)
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(pick(1234), pick(1234));
    }

    #[test]
    fn test_calculate_move_on_decided_board() {
        let mut rng = SessionRng::new(0);
        for bot_type in [BotType::Minimax, BotType::Random] {
            let input = BotInput {
                board: Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]),
                current_mark: O,
                search_depth: SearchDepth::Full,
            };
            assert_eq!(calculate_move(bot_type, input, &mut rng), None);
        }
    }
}
