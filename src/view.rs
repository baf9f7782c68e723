//! Projection of a [`GameState`] into what the page draws.
//!
//! Everything here is recomputed from the model on each render; the page never
//! reports state back.

use serde::{Deserialize, Serialize};

use crate::board::Cell;
use crate::game::{GameState, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Info,
    Win,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub mark: Cell,
    pub disabled: bool,
    pub selected: bool,
    pub win: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub cells: Vec<CellView>,
    pub selected: usize,
    pub game_over: bool,
    pub winning_cells: Vec<usize>,
    pub message: String,
    pub category: StatusCategory,
}

impl View {
    pub fn of(game: &GameState) -> View {
        let game_over = game.is_over();
        let winning_cells = match game.status() {
            Status::Won { line, .. } => line.to_vec(),
            _ => Vec::new(),
        };
        let cells = game
            .board()
            .cells()
            .iter()
            .enumerate()
            .map(|(index, &mark)| CellView {
                mark,
                disabled: game_over || !mark.is_empty(),
                selected: !game_over && index == game.selection(),
                win: winning_cells.contains(&index),
            })
            .collect();
        let (message, category) = status_line(game);
        View {
            cells,
            selected: game.selection(),
            game_over,
            winning_cells,
            message,
            category,
        }
    }
}

fn status_line(game: &GameState) -> (String, StatusCategory) {
    match game.status() {
        Status::InProgress => (format!("Turn: {}", game.current_player()), StatusCategory::Info),
        Status::Won { player, .. } => (format!("🏆 {player} wins!"), StatusCategory::Win),
        Status::Draw => ("🤝 Draw!".to_string(), StatusCategory::Draw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &index in moves {
            game.commit_move(index);
        }
        game
    }

    #[test]
    fn test_fresh_game_view() {
        let view = View::of(&GameState::new());
        assert_eq!(view.cells.len(), 9);
        assert_eq!(view.message, "Turn: X");
        assert_eq!(view.category, StatusCategory::Info);
        assert!(!view.game_over);
        assert!(view.winning_cells.is_empty());
        assert!(view.cells[0].selected);
        assert!(view.cells[1..].iter().all(|cell| !cell.selected && !cell.disabled));
    }

    #[test]
    fn test_occupied_cells_are_disabled() {
        let view = View::of(&play(&[4]));
        assert_eq!(view.message, "Turn: O");
        assert_eq!(view.cells[4].mark, Cell::X);
        assert!(view.cells[4].disabled);
        assert!(!view.cells[3].disabled);
    }

    #[test]
    fn test_won_view() {
        let view = View::of(&play(&[0, 1, 3, 4, 6]));
        assert!(view.game_over);
        assert_eq!(view.message, "🏆 X wins!");
        assert_eq!(view.category, StatusCategory::Win);
        assert_eq!(view.winning_cells, vec![0, 3, 6]);
        for (index, cell) in view.cells.iter().enumerate() {
            assert!(cell.disabled);
            assert!(!cell.selected);
            assert_eq!(cell.win, [0, 3, 6].contains(&index));
        }
    }

    #[test]
    fn test_draw_view() {
        let view = View::of(&play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]));
        assert!(view.game_over);
        assert_eq!(view.message, "🤝 Draw!");
        assert_eq!(view.category, StatusCategory::Draw);
        assert!(view.winning_cells.is_empty());
        assert!(view.cells.iter().all(|cell| !cell.win));
    }

    #[test]
    fn test_view_serializes_category_lowercase() {
        let json = serde_json::to_value(View::of(&GameState::new())).unwrap();
        assert_eq!(json["category"], "info");
        assert_eq!(json["cells"][0]["mark"], "");
        assert_eq!(json["selected"], 0);
    }
}
