//! Wire events
//!
//! Every WebSocket text frame carries one JSON envelope:
//! `{"event": "<name>", "data": <payload>}`.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tungstenite::protocol::Message as WsMessage;

use crate::client::Delivery;
use crate::hub::Message;

const CHAT_MESSAGE: &str = "chat:message";

/// Events a client may send.
///
/// A `chat:message` without `data` decodes as a `null` payload and is
/// relayed like any other.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientEvent {
    #[serde(rename = "chat:message")]
    Message(Message),
}

#[derive(Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: Value,
}

impl<'de> Deserialize<'de> for ClientEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Envelope { event, data } = Envelope::deserialize(deserializer)?;
        match event.as_str() {
            CHAT_MESSAGE => Ok(ClientEvent::Message(Message::from(data))),
            other => Err(de::Error::unknown_variant(other, &[CHAT_MESSAGE])),
        }
    }
}

/// Events the server sends.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerEvent {
    /// Replay history, oldest first. Always the first frame on a connection.
    #[serde(rename = "chat:buffer")]
    Buffer(Vec<Message>),
    #[serde(rename = "chat:message")]
    Message(Message),
}

impl ClientEvent {
    pub fn from_frame(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_frame(&self) -> Result<WsMessage, serde_json::Error> {
        Ok(WsMessage::text(serde_json::to_string(self)?))
    }
}

impl ServerEvent {
    pub fn from_frame(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_frame(&self) -> Result<WsMessage, serde_json::Error> {
        Ok(WsMessage::text(serde_json::to_string(self)?))
    }
}

impl From<Delivery> for ServerEvent {
    fn from(delivery: Delivery) -> Self {
        match delivery {
            Delivery::Buffer(messages) => ServerEvent::Buffer(messages),
            Delivery::Message(message) => ServerEvent::Message(message),
        }
    }
}
