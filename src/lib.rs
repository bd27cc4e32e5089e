//! Command Bridge - asynchronous command execution for chat-style
//! command frameworks.
//!
//! A dispatcher hands a matched invocation to an
//! [`AsyncCommandExecutor`](application::AsyncCommandExecutor), which
//! evaluates arguments against the handler's declared shape, runs the
//! handler off the dispatcher thread, and maps every failure to exactly
//! one user-facing message. Internal causes are logged, never shown.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
