//! Serves the board page and the game websocket.
//!
//! Run it and open the printed URL:
//!
//!     cargo run -- --http-addr 127.0.0.1:8080 --ws-addr 127.0.0.1:8081

use anyhow::Result;
use clap::Parser;
use tic_tac_toe::config::Config;
use tic_tac_toe::resources::StaticResource;
use tic_tac_toe::server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let filter = match &config.log_filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ws_endpoint = config.ws_endpoint();
    let resources = StaticResource::new(&ws_endpoint).await;

    let http_listener = server::bind(&config.http_addr).await?;
    let ws_listener = server::bind(&config.ws_addr).await?;
    info!(http = %config.http_addr, ws = %ws_endpoint, "listening");
    info!("open http://{} to play", config.http_addr);

    tokio::select! {
        result = server::run_http(http_listener, resources) => result?,
        result = server::run_websocket(ws_listener) => result?,
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }

    Ok(())
}
