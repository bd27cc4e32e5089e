//! Message categories for user-facing command feedback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of categories a failure message can resolve through.
///
/// The catalog maps each category to display text, either by substituting
/// a failure's detail string into the category's template or by rendering
/// the category's default against the owning command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Generic expected error with a detail supplied by the handler.
    Error,
    /// Invoker lacks permission for the command.
    NoPermission,
    /// Arguments did not match the handler's declared shape.
    IncorrectUsage,
    /// Command was invoked by a sender kind it does not support.
    IncorrectTarget,
}

impl MessageType {
    /// All categories, in a stable order.
    pub fn all() -> [MessageType; 4] {
        [
            MessageType::Error,
            MessageType::NoPermission,
            MessageType::IncorrectUsage,
            MessageType::IncorrectTarget,
        ]
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MessageType::Error => "ERROR",
            MessageType::NoPermission => "NO_PERMISSION",
            MessageType::IncorrectUsage => "INCORRECT_USAGE",
            MessageType::IncorrectTarget => "INCORRECT_TARGET",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_as_screaming_snake_case() {
        assert_eq!(format!("{}", MessageType::IncorrectUsage), "INCORRECT_USAGE");
        assert_eq!(format!("{}", MessageType::NoPermission), "NO_PERMISSION");
    }

    #[test]
    fn all_lists_every_category_once() {
        let all = MessageType::all();
        assert_eq!(all.len(), 4);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
