//! The `transport` module is responsible for network communication with
//! clients over WebSockets.
//!
//! It defines the event envelopes exchanged with clients and implements the
//! listener that accepts connections, attaches each one to the hub, and
//! forwards inbound `chat:message` events to it.

pub mod message;
pub mod websocket;

#[cfg(test)]
mod tests;

pub use message::{ClientEvent, ServerEvent};
pub use websocket::start_websocket_server;
