//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `roomcast` application.
//!
//! - `error`: the crate-wide error type used by startup and the CLI client.
//! - `logging`: tracing subscriber setup.

pub mod error;
pub mod logging;
