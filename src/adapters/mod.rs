//! Adapters - Implementations of port interfaces.
//!
//! - `catalog` - in-memory message catalog with overridable templates
//! - `console` - stdout-backed command context for local runs

mod catalog;
mod console;

pub use catalog::InMemoryMessageCatalog;
pub use console::ConsoleContext;
