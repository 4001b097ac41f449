use thiserror::Error;

/// Errors produced by the chat client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server refused the nickname because another user holds it.
    #[error("nickname \"{0}\" is taken")]
    NicknameTaken(String),

    /// HTTP failure on the nickname claim (connect error, unreadable body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A payload did not have the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
