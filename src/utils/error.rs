//! The `error` module defines the error type used at the edges of `roomcast`.
//!
//! The hub itself never fails; errors only come from loading configuration,
//! binding the listener, and the WebSocket client used by the CLI.

use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("protocol error: {0}")]
    Protocol(String),
}

pub type Result<T> = std::result::Result<T, RelayError>;
