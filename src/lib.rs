//! # roomcast
//!
//! `roomcast` is a single-room, in-memory chat relay built with Rust. Clients
//! connect over WebSockets, publish short messages, and receive every message
//! any client publishes, in the order the server saw them. Newcomers are first
//! sent a bounded window of recent history.
//!
//! ## Core Modules
//!
//! - `hub`: the replay buffer, the connection registry, and the engine that
//!   publishes and fans out messages.
//! - `client`: the per-connection handle the hub delivers to.
//! - `config`: loading and merging server configuration.
//! - `transport`: the WebSocket listener and the JSON event envelopes.
//! - `utils`: error type and logging setup.

pub mod client;
pub mod config;
pub mod hub;
pub mod transport;
pub mod utils;
