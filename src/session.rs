use std::net::SocketAddr;

use futures_channel::mpsc::UnboundedSender;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use crate::game::GameState;
use crate::input::dispatch;
use crate::message::{message_send, multi_message_send, parse_input, ServerMessage};
use crate::view::View;

/// One game bound to one websocket peer. The connection task owns it and feeds
/// it frames one at a time.
pub struct GameSession {
    pub(crate) game: GameState,
    sender: UnboundedSender<Message>,
    peer: SocketAddr,
}

impl GameSession {
    pub fn new(sender: UnboundedSender<Message>, peer: SocketAddr) -> GameSession {
        GameSession { game: GameState::new(), sender, peer }
    }

    pub fn start_game(&self) {
        info!(peer = %self.peer, "starting game");
        multi_message_send(&self.sender, &[ServerMessage::hello(), self.render()]);
    }

    pub fn process_player_input(&mut self, input: &Message) {
        let input_text = match input {
            Message::Text(text) => text,
            other => {
                debug!(peer = %self.peer, kind = frame_kind(other), "ignoring non-text frame");
                return;
            }
        };
        let message = match parse_input(input_text) {
            Ok(message) => message,
            Err(err) => {
                warn!(peer = %self.peer, error = %err, "rejected client message");
                message_send(&self.sender, &ServerMessage::Error { text: err.to_string() });
                return;
            }
        };
        let Some((event, focus)) = message.into_event() else {
            debug!(peer = %self.peer, "unrecognized key");
            return;
        };
        if dispatch(&mut self.game, event, focus) {
            debug!(
                peer = %self.peer,
                ?event,
                board = %self.game.board(),
                status = ?self.game.status(),
                "input applied"
            );
            message_send(&self.sender, &self.render());
        }
    }

    pub fn close_session(&self) {
        info!(
            peer = %self.peer,
            status = ?self.game.status(),
            moves = self.game.board().occupied(),
            "session closed"
        );
    }

    fn render(&self) -> ServerMessage {
        ServerMessage::Render { view: View::of(&self.game) }
    }
}

fn frame_kind(frame: &Message) -> &'static str {
    match frame {
        Message::Text(_) => "text",
        Message::Binary(_) => "binary",
        Message::Ping(_) => "ping",
        Message::Pong(_) => "pong",
        Message::Close(_) => "close",
        Message::Frame(_) => "frame",
    }
}
