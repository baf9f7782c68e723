//! Win and draw evaluation. Stateless; every call rescans the whole board.

use serde::{Deserialize, Serialize};

use crate::board::{GameBoard, Player};

pub type Line = [usize; 3];

/// Rows, then columns, then diagonals. The scan order decides which line is
/// reported when more than one is complete.
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    pub player: Player,
    pub line: Line,
}

pub fn find_winner(board: &GameBoard) -> Option<Win> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let player = board.cell(a).mark()?;
        (board.cell(b) == board.cell(a) && board.cell(c) == board.cell(a))
            .then_some(Win { player, line })
    })
}

pub fn is_draw(board: &GameBoard) -> bool {
    board.is_full() && find_winner(board).is_none()
}
