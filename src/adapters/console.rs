//! Console-backed command context for local runs.

use crate::ports::CommandContext;

/// Context that reads an invocation from process arguments and replies
/// on standard output. Used by the demo binary and manual testing.
pub struct ConsoleContext {
    label: String,
    args: Vec<String>,
}

impl ConsoleContext {
    pub fn new(label: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            label: label.into(),
            args,
        }
    }
}

impl CommandContext for ConsoleContext {
    fn label(&self) -> &str {
        &self.label
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn send_message(&self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_label_and_args() {
        let ctx = ConsoleContext::new("greet", vec!["Alice".to_string()]);
        assert_eq!(ctx.label(), "greet");
        assert_eq!(ctx.args(), ["Alice".to_string()]);
    }
}
