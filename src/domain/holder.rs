//! The registered command entity that owns a handler binding.

/// Identity and display data for a registered command.
///
/// Supplies the `{command}` and `{usage}` substitutions when a message
/// category resolves to its default template. Immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHolder {
    name: String,
    usage: String,
    description: Option<String>,
}

impl CommandHolder {
    /// Creates a holder for a command with the given primary name and
    /// usage string (e.g. `"ban <player> [reason]"`).
    pub fn new(name: impl Into<String>, usage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: usage.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holder_exposes_name_and_usage() {
        let holder = CommandHolder::new("ban", "ban <player> [reason]");
        assert_eq!(holder.name(), "ban");
        assert_eq!(holder.usage(), "ban <player> [reason]");
        assert_eq!(holder.description(), None);
    }

    #[test]
    fn with_description_sets_description() {
        let holder = CommandHolder::new("ban", "ban <player>")
            .with_description("Bans a player from the server");
        assert_eq!(holder.description(), Some("Bans a player from the server"));
    }
}
