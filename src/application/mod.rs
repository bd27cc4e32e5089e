//! Application layer - the executor and its task scope.
//!
//! Orchestrates argument evaluation, handler invocation, and failure
//! reporting over the ports. Nothing here performs I/O beyond the ports.

mod executor;
mod scope;

pub use executor::AsyncCommandExecutor;
pub use scope::TaskScope;
