//! The `hub` module is the relay core: the replay buffer, the connection
//! registry and the engine that ties both to publish and fan-out.

pub mod buffer;
pub mod engine;
pub mod message;
pub mod registry;

pub use buffer::{DEFAULT_CAPACITY, ReplayBuffer};
pub use engine::{Hub, SharedHub, lock_hub};
pub use message::Message;
pub use registry::ConnectionRegistry;
