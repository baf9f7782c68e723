use crate::board::{index_of, row_col, GameBoard, Player, CELL_COUNT, SIDE};
use crate::rules::{find_winner, is_draw, Line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won { player: Player, line: Line },
    Draw,
}

impl Status {
    pub fn is_over(&self) -> bool {
        *self != Status::InProgress
    }
}

/// Board, turn, outcome and keyboard cursor of a single game.
///
/// Invalid operations are silent no-ops: committing to an occupied cell, to an
/// off-board index or after the game has ended leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: GameBoard,
    current_player: Player,
    status: Status,
    selection: usize,
}

impl GameState {
    pub fn new() -> GameState {
        GameState {
            board: GameBoard::new(),
            current_player: Player::X,
            status: Status::InProgress,
            selection: 0,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Places the current player's mark at `index`, then settles the outcome.
    /// The turn passes only when the move did not end the game.
    pub fn commit_move(&mut self, index: usize) -> Status {
        if self.is_over() || !self.board.update_cell(index, self.current_player) {
            return self.status;
        }
        if let Some(win) = find_winner(&self.board) {
            self.status = Status::Won { player: win.player, line: win.line };
        } else if is_draw(&self.board) {
            self.status = Status::Draw;
        } else {
            self.current_player = self.current_player.opponent();
        }
        self.status
    }

    /// Moves the cursor by whole cells, clamping each axis at the board edge.
    pub fn move_selection(&mut self, delta_col: i8, delta_row: i8) {
        let (row, col) = row_col(self.selection);
        let row = clamp_axis(row, delta_row);
        let col = clamp_axis(col, delta_col);
        self.selection = index_of(row, col);
    }

    /// Puts the cursor on `index`; off-board indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < CELL_COUNT {
            self.selection = index;
        }
    }

    pub fn reset(&mut self) {
        *self = GameState::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_axis(position: usize, delta: i8) -> usize {
    (position as i64 + delta as i64).clamp(0, SIDE as i64 - 1) as usize
}
