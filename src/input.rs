//! Maps pointer and keyboard input onto game operations.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::game::GameState;

/// Keys the board reacts to. The browser must suppress their default action
/// (page scroll on arrows and space) whenever one of them reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    #[serde(rename = " ")]
    Space,
}

impl Key {
    pub const RECOGNIZED: [Key; 6] = [
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::Enter,
        Key::Space,
    ];

    /// Looks a key up by its DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Option<Key> {
        Self::RECOGNIZED.into_iter().find(|key| key.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Enter => "Enter",
            Key::Space => " ",
        }
    }

    pub fn event(&self) -> InputEvent {
        match self {
            Key::ArrowUp => InputEvent::DirectionPressed { dx: 0, dy: -1 },
            Key::ArrowDown => InputEvent::DirectionPressed { dx: 0, dy: 1 },
            Key::ArrowLeft => InputEvent::DirectionPressed { dx: -1, dy: 0 },
            Key::ArrowRight => InputEvent::DirectionPressed { dx: 1, dy: 0 },
            Key::Enter | Key::Space => InputEvent::ConfirmPressed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer selection and commit in one gesture.
    CellActivated(usize),
    DirectionPressed { dx: i8, dy: i8 },
    ConfirmPressed,
    ResetRequested,
}

/// Where keyboard focus sat when the event was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Board,
    TextField,
}

/// Applies one input event. Returns true when the event was handled and the
/// view needs redrawing, false when it was suppressed.
pub fn dispatch(game: &mut GameState, event: InputEvent, focus: Focus) -> bool {
    match event {
        InputEvent::CellActivated(index) => {
            game.select(index);
            game.commit_move(index);
            true
        }
        InputEvent::DirectionPressed { .. } | InputEvent::ConfirmPressed
            if game.is_over() || focus == Focus::TextField =>
        {
            trace!(?event, ?focus, "keyboard input suppressed");
            false
        }
        InputEvent::DirectionPressed { dx, dy } => {
            game.move_selection(dx.clamp(-1, 1), dy.clamp(-1, 1));
            true
        }
        InputEvent::ConfirmPressed => {
            game.commit_move(game.selection());
            true
        }
        InputEvent::ResetRequested => {
            game.reset();
            true
        }
    }
}
