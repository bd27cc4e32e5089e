//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `COMMAND_BRIDGE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use command_bridge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod messages;

pub use error::{ConfigError, ValidationError};
pub use messages::MessagesConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// User-facing message texts
    #[serde(default)]
    pub messages: MessagesConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `COMMAND_BRIDGE` prefix:
    ///
    /// - `COMMAND_BRIDGE__MESSAGES__INTERNAL_ERROR_TEXT=...`
    /// - `COMMAND_BRIDGE__MESSAGES__FORMAT_PREFIX=...`
    /// - `COMMAND_BRIDGE__LOG_LEVEL=debug`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMMAND_BRIDGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.messages.validate()?;
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::InvalidLogFilter);
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            messages: MessagesConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("COMMAND_BRIDGE__MESSAGES__INTERNAL_ERROR_TEXT");
        env::remove_var("COMMAND_BRIDGE__MESSAGES__FORMAT_PREFIX");
        env::remove_var("COMMAND_BRIDGE__LOG_LEVEL");
    }

    #[test]
    fn loads_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config
            .messages
            .internal_error_text
            .contains("internal error"));
    }

    #[test]
    fn environment_overrides_message_text() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(
            "COMMAND_BRIDGE__MESSAGES__INTERNAL_ERROR_TEXT",
            "Something broke, ping an admin.",
        );

        let config = AppConfig::load().unwrap();
        clear_env();

        assert_eq!(
            config.messages.internal_error_text,
            "Something broke, ping an admin."
        );
    }

    #[test]
    fn default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_log_level_fails_validation() {
        let config = AppConfig {
            log_level: "".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogFilter)
        ));
    }
}
