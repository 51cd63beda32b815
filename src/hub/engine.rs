//! Hub engine
//!
//! The hub owns the replay buffer and the connection registry and is the only
//! thing that mutates them:
//! - `subscribe` registers a connection and unicasts the replay snapshot to it
//! - `publish` appends to the replay buffer, then fans out to every
//!   registered connection, the publisher included
//! - `unsubscribe` drops a connection from the fan-out set
//!
//! Concurrency and usage notes:
//! - The API is synchronous and meant to sit behind a lock (`SharedHub`).
//!   Every operation runs to completion inside one lock acquisition and only
//!   enqueues into unbounded channels, so all connections see publishes in
//!   one global order and a new connection's snapshot is queued strictly
//!   before any message published after it registered.
//! - Callers must not hold the lock across `.await`.
//!
//! Memory: the replay buffer is bounded, but each connection's delivery
//! channel is unbounded, so a client that stops reading keeps its pending
//! deliveries queued until its transport task unsubscribes it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::buffer::ReplayBuffer;
use super::message::Message;
use super::registry::ConnectionRegistry;
use crate::client::{Connection, ConnectionId, Delivery};

pub type SharedHub = Arc<Mutex<Hub>>;

/// Lock a shared hub, recovering the guard if a previous holder panicked.
pub fn lock_hub(hub: &SharedHub) -> MutexGuard<'_, Hub> {
    hub.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
pub struct Hub {
    buffer: ReplayBuffer,
    registry: ConnectionRegistry,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// A hub whose replay buffer keeps `capacity` messages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: ReplayBuffer::with_capacity(capacity),
            registry: ConnectionRegistry::new(),
        }
    }

    pub fn into_shared(self) -> SharedHub {
        Arc::new(Mutex::new(self))
    }

    /// Register `connection` and send it the current replay snapshot.
    pub fn subscribe(&mut self, connection: Connection) -> ConnectionId {
        let id = connection.id.clone();
        if !connection.deliver(Delivery::Buffer(self.buffer.snapshot())) {
            debug!("{id} went away before its replay buffer was delivered");
        }
        self.registry.register(connection);
        id
    }

    /// Remove a connection from the fan-out set. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: &ConnectionId) {
        if self.registry.unregister(id).is_some() {
            debug!("unsubscribed {id}");
        }
    }

    /// Record `message` for replay and deliver it to every registered
    /// connection. Connections whose receiving side has closed are skipped.
    pub fn publish(&mut self, message: Message) {
        self.buffer.append(message.clone());

        let mut delivered = 0usize;
        for connection in self.registry.members() {
            if connection.deliver(Delivery::Message(message.clone())) {
                delivered += 1;
            } else {
                debug!("skipping {}: connection closed", connection.id);
            }
        }
        debug!(
            delivered,
            registered = self.registry.len(),
            "fanned out message"
        );
    }

    /// Ordered copy of the replay buffer, oldest first.
    pub fn snapshot(&self) -> Vec<Message> {
        self.buffer.snapshot()
    }

    pub fn connection_count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_subscribed(&self, id: &ConnectionId) -> bool {
        self.registry.contains(id)
    }
}
