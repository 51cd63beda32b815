//! Message definitions for the hub
//!
//! `Message` is the unit of conversation. The hub relays it as an opaque JSON
//! payload: whatever a client publishes under `chat:message` is stored and
//! fanned out verbatim, including payloads that are missing fields or carry
//! unexpected types.
//!
//! Well-formed messages carry:
//! - `id`: opaque unique id chosen by the publishing client
//! - `timestamp`: milliseconds since UNIX epoch, client-supplied
//! - `userId`: the publisher's self-assigned identity
//! - `username`: display name
//! - `text`: message body

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Value, json};

/// Immutable, cheaply clonable relay payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    body: Arc<Value>,
}

impl Message {
    /// Build a well-formed chat message.
    pub fn new(id: &str, timestamp: i64, user_id: &str, username: &str, text: &str) -> Self {
        Self::from(json!({
            "id": id,
            "timestamp": timestamp,
            "userId": user_id,
            "username": username,
            "text": text,
        }))
    }

    /// The payload exactly as it will go out on the wire.
    pub fn as_value(&self) -> &Value {
        &self.body
    }

    pub fn id(&self) -> Option<&str> {
        self.body.get("id").and_then(Value::as_str)
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.body.get("timestamp").and_then(Value::as_i64)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.body.get("userId").and_then(Value::as_str)
    }

    pub fn username(&self) -> Option<&str> {
        self.body.get("username").and_then(Value::as_str)
    }

    pub fn text(&self) -> Option<&str> {
        self.body.get("text").and_then(Value::as_str)
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Self {
            body: Arc::new(value),
        }
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Message::from)
    }
}
