//! Connection registry
//!
//! Tracks the connections currently eligible for fan-out. Callers must
//! synchronize access (the hub lock does this) so that `members()` always
//! reflects every register/unregister that happened before it.

use std::collections::HashMap;

use crate::client::{Connection, ConnectionId};

#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: HashMap<ConnectionId, Connection>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: HashMap::new(),
        }
    }

    /// Add a connection to the active set.
    pub fn register(&mut self, connection: Connection) {
        self.connections.insert(connection.id.clone(), connection);
    }

    /// Remove a connection. Removing an unknown id is a no-op.
    pub fn unregister(&mut self, id: &ConnectionId) -> Option<Connection> {
        self.connections.remove(id)
    }

    /// The current membership. Iteration order is unspecified.
    pub fn members(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
