use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::hub::Message;

pub type ConnectionId = String;

/// What the hub pushes down a connection's channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// The replay snapshot, sent once right after the handshake.
    Buffer(Vec<Message>),
    /// One published message.
    Message(Message),
}

/// Represents a live client session in the relay.
///
/// The transport owns the receiving half of the channel and writes whatever
/// arrives on it to the socket.
#[derive(Debug)]
pub struct Connection {
    /// Server-assigned identifier, unique per session.
    pub id: ConnectionId,

    /// Channel to push deliveries to the client.
    pub sender: UnboundedSender<Delivery>,
}

impl Connection {
    pub fn new(sender: UnboundedSender<Delivery>) -> Self {
        Self {
            id: format!("conn-{}", Uuid::new_v4()),
            sender,
        }
    }

    /// Queue a delivery. Returns `false` if the receiving side is gone.
    pub fn deliver(&self, delivery: Delivery) -> bool {
        self.sender.send(delivery).is_ok()
    }
}
