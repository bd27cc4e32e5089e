//! Message catalog port - maps failure categories to display text.

use crate::domain::{CommandHolder, MessageType};

/// Read-only lookup from a message category to final display text.
///
/// Implementations are shared across concurrent invocations and must not
/// require locking after construction.
pub trait MessageCatalog: Send + Sync {
    /// Renders the category's template with `detail` substituted in.
    fn get_replacing(&self, message_type: MessageType, detail: &str) -> String;

    /// Renders the category's default message against the owning command.
    fn get_default(&self, message_type: MessageType, holder: &CommandHolder) -> String;
}
