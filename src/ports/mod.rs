//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the executor and the outside world. Adapters (and the host dispatcher)
//! implement these ports.
//!
//! - `CommandContext` - per-invocation input and the reply capability
//! - `CommandHandler` - the command logic plus its parameter shape
//! - `MessageCatalog` - category-to-display-text lookup

mod catalog;
mod context;
mod handler;

pub use catalog::MessageCatalog;
pub use context::CommandContext;
pub use handler::CommandHandler;
