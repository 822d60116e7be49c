use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Board, Mark};

/// Background board shown under the menu: one random move per menu visit,
/// cleared once a round is decided.
pub struct MenuDemo {
    board: Board,
    turn: Mark,
    rng: SessionRng,
}

impl MenuDemo {
    pub fn new(rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn advance(&mut self) {
        if self.board.check_rules().is_terminal() {
            self.board.reset();
            self.turn = Mark::X;
            return;
        }

        let moves = self.board.available_moves();
        if moves.is_empty() {
            return;
        }
        let pos = moves[self.rng.random_range(0..moves.len())];
        self.board.set_cell(pos.x, pos.y, self.turn);
        if let Some(next) = self.turn.opponent() {
            self.turn = next;
        }
    }
}
