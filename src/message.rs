//! JSON frames exchanged with the page over the websocket.

use futures_channel::mpsc::{TrySendError, UnboundedSender};
use serde::{Deserialize, Serialize};
use tokio_tungstenite::tungstenite::protocol::Message;
use tracing::{debug, warn};

use crate::board::CELL_COUNT;
use crate::error::ProtocolError;
use crate::input::{Focus, InputEvent, Key};
use crate::view::View;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    CellActivated {
        index: usize,
    },
    DirectionPressed {
        dx: i8,
        dy: i8,
        #[serde(default)]
        editing: bool,
    },
    ConfirmPressed {
        #[serde(default)]
        editing: bool,
    },
    /// Raw `KeyboardEvent.key`; unknown keys are dropped by [`ClientMessage::into_event`].
    KeyPressed {
        key: String,
        #[serde(default)]
        editing: bool,
    },
    ResetRequested,
}

impl ClientMessage {
    pub fn into_event(self) -> Option<(InputEvent, Focus)> {
        match self {
            ClientMessage::CellActivated { index } => {
                Some((InputEvent::CellActivated(index), Focus::Board))
            }
            ClientMessage::DirectionPressed { dx, dy, editing } => {
                Some((InputEvent::DirectionPressed { dx, dy }, focus_of(editing)))
            }
            ClientMessage::ConfirmPressed { editing } => {
                Some((InputEvent::ConfirmPressed, focus_of(editing)))
            }
            ClientMessage::KeyPressed { key, editing } => {
                Key::from_name(&key).map(|key| (key.event(), focus_of(editing)))
            }
            ClientMessage::ResetRequested => Some((InputEvent::ResetRequested, Focus::Board)),
        }
    }
}

fn focus_of(editing: bool) -> Focus {
    if editing {
        Focus::TextField
    } else {
        Focus::Board
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    /// Sent once per connection, before the first render.
    Hello { keys: Vec<Key> },
    Render { view: View },
    Error { text: String },
}

impl ServerMessage {
    pub fn hello() -> ServerMessage {
        ServerMessage::Hello { keys: Key::RECOGNIZED.to_vec() }
    }
}

pub fn parse_input(input_text: &str) -> Result<ClientMessage, ProtocolError> {
    let message: ClientMessage = serde_json::from_str(input_text)?;
    if let ClientMessage::CellActivated { index } = message {
        if index >= CELL_COUNT {
            return Err(ProtocolError::CellOutOfRange(index));
        }
    }
    Ok(message)
}

pub fn multi_message_send(sender: &UnboundedSender<Message>, messages: &[ServerMessage]) {
    for message in messages {
        message_send(sender, message);
    }
}

pub fn message_send(sender: &UnboundedSender<Message>, message: &ServerMessage) {
    match ws_message_of(message) {
        Ok(frame) => sender.unbounded_send(frame).unwrap_or_else(sent_fail_notify),
        Err(err) => warn!(error = %err, "could not encode server message"),
    }
}

fn ws_message_of(message: &ServerMessage) -> Result<Message, serde_json::Error> {
    let text = serde_json::to_string(message)?;
    debug!(%text, "outgoing frame");
    Ok(Message::Text(text))
}

fn sent_fail_notify(err: TrySendError<Message>) {
    debug!(disconnected = err.is_disconnected(), "could not send message, peer gone");
}
