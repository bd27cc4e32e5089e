//! In-memory message catalog with overridable templates.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::{CommandHolder, MessageType};
use crate::ports::MessageCatalog;

// Templates used when a failure carries a detail string; `{message}`
// receives the detail.
static REPLACING_TEMPLATES: Lazy<HashMap<MessageType, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (MessageType::Error, "An error occurred: {message}"),
        (MessageType::NoPermission, "Required permission: {message}"),
        (MessageType::IncorrectUsage, "Incorrect usage: {message}"),
        (
            MessageType::IncorrectTarget,
            "You cannot execute this command as {message}.",
        ),
    ])
});

// Templates used when a failure carries no detail; `{command}` and
// `{usage}` are filled from the owning command holder.
static DEFAULT_TEMPLATES: Lazy<HashMap<MessageType, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            MessageType::Error,
            "An error occurred while running /{command}.",
        ),
        (
            MessageType::NoPermission,
            "You do not have permission to run /{command}.",
        ),
        (MessageType::IncorrectUsage, "Incorrect usage. Try: /{usage}"),
        (
            MessageType::IncorrectTarget,
            "/{command} cannot be run by this sender.",
        ),
    ])
});

/// Message catalog backed by per-category template maps.
///
/// Starts with the built-in templates; hosts override individual entries
/// at construction time. Read-only afterwards.
pub struct InMemoryMessageCatalog {
    replacing: HashMap<MessageType, String>,
    defaults: HashMap<MessageType, String>,
}

impl InMemoryMessageCatalog {
    pub fn new() -> Self {
        Self {
            replacing: REPLACING_TEMPLATES
                .iter()
                .map(|(k, v)| (*k, v.to_string()))
                .collect(),
            defaults: DEFAULT_TEMPLATES
                .iter()
                .map(|(k, v)| (*k, v.to_string()))
                .collect(),
        }
    }

    /// Overrides the detail-substituting template for a category.
    pub fn with_replacing_template(
        mut self,
        message_type: MessageType,
        template: impl Into<String>,
    ) -> Self {
        self.replacing.insert(message_type, template.into());
        self
    }

    /// Overrides the default template for a category.
    pub fn with_default_template(
        mut self,
        message_type: MessageType,
        template: impl Into<String>,
    ) -> Self {
        self.defaults.insert(message_type, template.into());
        self
    }
}

impl Default for InMemoryMessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCatalog for InMemoryMessageCatalog {
    fn get_replacing(&self, message_type: MessageType, detail: &str) -> String {
        // Every category is seeded in new(), so the lookup cannot miss;
        // fall back to the raw detail if an override removed it anyway.
        self.replacing
            .get(&message_type)
            .map(|template| template.replace("{message}", detail))
            .unwrap_or_else(|| detail.to_string())
    }

    fn get_default(&self, message_type: MessageType, holder: &CommandHolder) -> String {
        self.defaults
            .get(&message_type)
            .map(|template| {
                template
                    .replace("{command}", holder.name())
                    .replace("{usage}", holder.usage())
            })
            .unwrap_or_else(|| format!("Command /{} failed.", holder.name()))
    }
}
