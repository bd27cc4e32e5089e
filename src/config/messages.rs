//! User-facing message configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Fixed message texts the executor sends on its own behalf.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesConfig {
    /// Text sent for any failure the invoker must not see the detail of.
    #[serde(default = "default_internal_error_text")]
    pub internal_error_text: String,

    /// Host formatting marker prepended to the internal-error text
    /// (e.g. a chat color code). Empty by default.
    #[serde(default)]
    pub format_prefix: String,
}

impl MessagesConfig {
    /// The complete internal-error message as sent to the invoker.
    pub fn internal_error_message(&self) -> String {
        format!("{}{}", self.format_prefix, self.internal_error_text)
    }

    /// Validate message configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.internal_error_text.trim().is_empty() {
            return Err(ValidationError::EmptyInternalErrorText);
        }
        Ok(())
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            internal_error_text: default_internal_error_text(),
            format_prefix: String::new(),
        }
    }
}

fn default_internal_error_text() -> String {
    "An internal error occurred, please contact the staff team.".to_string()
}
