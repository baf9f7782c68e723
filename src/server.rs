//! Listener loops: the page over HTTP and one game actor per websocket.

use std::{convert::Infallible, net::SocketAddr};

use futures_channel::mpsc::unbounded;
use futures_util::{future, future::Either, pin_mut, stream::TryStreamExt, StreamExt};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use crate::error::ServerError;
use crate::resources::StaticResource;
use crate::session::GameSession;

pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr).await.map_err(|source| ServerError::Bind {
        addr: addr.to_string(),
        source,
    })
}

/// Accepts websocket peers forever, each in its own task with its own game.
pub async fn run_websocket(listener: TcpListener) -> Result<(), ServerError> {
    loop {
        let (stream, addr) = listener.accept().await.map_err(ServerError::Accept)?;
        tokio::spawn(async move {
            if let Err(err) = handle_connection(stream, addr).await {
                warn!(error = %err, "websocket connection dropped");
            }
        });
    }
}

async fn handle_connection(raw_stream: TcpStream, addr: SocketAddr) -> Result<(), ServerError> {
    debug!(%addr, "incoming TCP connection");

    let ws_stream = tokio_tungstenite::accept_async(raw_stream)
        .await
        .map_err(|source| ServerError::Handshake { addr, source })?;
    info!(%addr, "websocket connection established");

    let (outgoing, incoming) = ws_stream.split();
    let (tx, rx) = unbounded();
    let mut session = GameSession::new(tx, addr);
    session.start_game();

    {
        let server_messages = rx.map(Ok).forward(outgoing);
        let player_input = incoming.try_for_each(|msg| {
            session.process_player_input(&msg);
            future::ok(())
        });
        pin_mut!(server_messages, player_input);

        match future::select(server_messages, player_input).await {
            Either::Left((Err(err), _)) | Either::Right((Err(err), _)) => {
                debug!(%addr, error = %err, "websocket closed with error");
            }
            _ => {}
        }
    }

    session.close_session();
    Ok(())
}

/// Serves the page, script and stylesheet.
pub async fn run_http(
    listener: TcpListener,
    resources: &'static StaticResource,
) -> Result<(), ServerError> {
    loop {
        let (stream, addr) = listener.accept().await.map_err(ServerError::Accept)?;
        let io = TokioIo::new(stream);
        tokio::spawn(async move {
            let service = service_fn(move |req| serve_static(req, resources));
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                debug!(%addr, error = %err, "http connection error");
            }
        });
    }
}

async fn serve_static(
    req: Request<Incoming>,
    resources: &StaticResource,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let response = static_response(req.method(), req.uri().path(), resources);
    debug!(method = %req.method(), path = req.uri().path(), status = %response.status(), "http request");
    Ok(response)
}

fn static_response(method: &Method, path: &str, resources: &StaticResource) -> Response<Full<Bytes>> {
    if *method != Method::GET && *method != Method::HEAD {
        let mut response = plain(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
        response.headers_mut().insert(ALLOW, HeaderValue::from_static("GET, HEAD"));
        return response;
    }
    match resources.lookup(path) {
        Some((content_type, body)) => {
            let mut response = Response::new(Full::new(body));
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
            response
        }
        None => plain(StatusCode::NOT_FOUND, "not found"),
    }
}

fn plain(status: StatusCode, text: &'static str) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from_static(text.as_bytes())));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    response
}
