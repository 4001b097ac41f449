//! Desktop chat client: claims a nickname over HTTP, then chats over a
//! single WebSocket.

pub mod common;
pub mod config;
pub mod error;
pub mod network;
pub mod ui;

pub use error::{ClientError, Result};
