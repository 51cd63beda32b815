//! The `client` module defines the representation of a client in the relay.
//!
//! It provides the `Connection` struct, which encapsulates the state of a
//! single connected client: its identifier and the channel the hub uses to
//! reach it.

pub mod connection;
pub use connection::{Connection, ConnectionId, Delivery};
