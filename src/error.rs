use std::net::SocketAddr;

/// Inbound frames the session could not turn into an input event.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed client message: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("cell index {0} is off the board")]
    CellOutOfRange(usize),
}

/// Failures of the listener loops. Errors on a single connection are logged
/// and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("failed to accept connection: {0}")]
    Accept(#[source] std::io::Error),

    #[error("websocket handshake with {addr} failed: {source}")]
    Handshake {
        addr: SocketAddr,
        source: tungstenite::Error,
    },
}
