//! Replay buffer
//!
//! A fixed-capacity FIFO of the most recent messages. New connections are
//! sent a snapshot of it so they don't join an empty conversation. Appending
//! past capacity evicts exactly one message from the head.

use std::collections::VecDeque;

use super::message::Message;

/// Number of messages kept for replay, and the most a buffer will ever hold.
pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Clone)]
pub struct ReplayBuffer {
    messages: VecDeque<Message>,
    capacity: usize,
}

impl Default for ReplayBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ReplayBuffer {
    /// Create an empty buffer holding at most `capacity` messages.
    /// `capacity` is clamped to `1..=DEFAULT_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, DEFAULT_CAPACITY);
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at the tail, evicting the oldest message on overflow.
    pub fn append(&mut self, message: Message) {
        self.messages.push_back(message);
        if self.messages.len() > self.capacity {
            self.messages.pop_front();
        }
    }

    /// Ordered copy of the contents, oldest first.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
