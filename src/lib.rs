//! Hot-seat tic-tac-toe for two people sharing one browser.
//!
//! The game itself ([`game`], [`rules`], [`input`]) is plain synchronous code over a
//! nine-cell array. The rest of the crate puts it on screen: [`server`] serves the
//! page and runs one [`session::GameSession`] per websocket, and every change is
//! pushed to the page as a freshly computed [`view::View`].

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod message;
pub mod resources;
pub mod rules;
pub mod server;
pub mod session;
pub mod view;
