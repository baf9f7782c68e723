use clap::Parser;

/// Hot-seat tic-tac-toe in the browser
#[derive(Parser, Debug, Clone)]
#[command(name = "tic-tac-toe")]
#[command(about = "Serves a two-player tic-tac-toe board to the browser", long_about = None)]
#[command(version)]
pub struct Config {
    /// Address the page is served on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub http_addr: String,

    /// Address the websocket listener binds to
    #[arg(long, default_value = "127.0.0.1:8081")]
    pub ws_addr: String,

    /// Websocket URL handed to the page. Defaults to ws://<ws-addr>
    #[arg(long)]
    pub ws_endpoint: Option<String>,

    /// Log filter directives, e.g. "tic_tac_toe=debug". Falls back to RUST_LOG, then "info"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Config {
    pub fn ws_endpoint(&self) -> String {
        self.ws_endpoint
            .clone()
            .unwrap_or_else(|| format!("ws://{}", self.ws_addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["tic-tac-toe"]);
        assert_eq!(config.http_addr, "127.0.0.1:8080");
        assert_eq!(config.ws_addr, "127.0.0.1:8081");
        assert_eq!(config.ws_endpoint(), "ws://127.0.0.1:8081");
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_endpoint_follows_ws_addr() {
        let config = Config::parse_from(["tic-tac-toe", "--ws-addr", "0.0.0.0:9000"]);
        assert_eq!(config.ws_endpoint(), "ws://0.0.0.0:9000");
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let config = Config::parse_from([
            "tic-tac-toe",
            "--ws-addr",
            "0.0.0.0:9000",
            "--ws-endpoint",
            "wss://games.example.org/ws",
        ]);
        assert_eq!(config.ws_endpoint(), "wss://games.example.org/ws");
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Config::try_parse_from(["tic-tac-toe", "--board-size", "4"]).is_err());
    }
}
