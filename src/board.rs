use std::fmt;

use serde::{Deserialize, Serialize};

pub const SIDE: usize = 3;
pub const CELL_COUNT: usize = SIDE * SIDE;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {

    pub fn opponent(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Content of one board position. Serialized as `""`, `"X"` or `"O"`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = "")]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn of(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn mark(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

/// Row-major 3x3 grid, `index = row * 3 + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    cells: [Cell; CELL_COUNT],
}

impl GameBoard {
    pub fn new() -> GameBoard {
        GameBoard { cells: [Cell::Empty; CELL_COUNT] }
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> GameBoard {
        GameBoard { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Out-of-range indices read as empty.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells.get(index).copied().unwrap_or_default()
    }

    /// Marks an empty cell. Returns false, leaving the board untouched, when the
    /// cell is occupied or the index is off the board.
    pub fn update_cell(&mut self, index: usize, player: Player) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::of(player);
                true
            }
            _ => false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new()
    }
}

pub fn row_col(index: usize) -> (usize, usize) {
    (index / SIDE, index % SIDE)
}

pub fn index_of(row: usize, col: usize) -> usize {
    row * SIDE + col
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                f.write_str("/")?;
            }
            for cell in chunk {
                f.write_str(cell.mark().map_or(".", |p| p.symbol()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = GameBoard::new();
        assert!(board.cells().iter().all(Cell::is_empty));
        assert_eq!(board.occupied(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_update_cell_marks_once() {
        let mut board = GameBoard::new();
        assert!(board.update_cell(4, Player::X));
        assert!(!board.update_cell(4, Player::O));
        assert_eq!(board.cell(4), Cell::X);
    }

    #[test]
    fn test_update_cell_off_board() {
        let mut board = GameBoard::new();
        assert!(!board.update_cell(9, Player::X));
        assert_eq!(board, GameBoard::new());
        assert_eq!(board.cell(42), Cell::Empty);
    }

    #[test]
    fn test_row_col_mapping() {
        assert_eq!(row_col(0), (0, 0));
        assert_eq!(row_col(5), (1, 2));
        assert_eq!(row_col(7), (2, 1));
        for index in 0..CELL_COUNT {
            let (row, col) = row_col(index);
            assert_eq!(index_of(row, col), index);
        }
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_display() {
        let mut board = GameBoard::new();
        board.update_cell(0, Player::X);
        board.update_cell(4, Player::O);
        assert_eq!(board.to_string(), "X../.O./...");
    }

    #[test]
    fn test_cell_serializes_as_mark() {
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Cell::X).unwrap(), "\"X\"");
        assert_eq!(serde_json::from_str::<Cell>("\"O\"").unwrap(), Cell::O);
    }
}
