//! Demo binary: wires one command end to end and executes it from argv.
//!
//! ```text
//! command-bridge greet Alice 3      # greets Alice three times
//! command-bridge greet Alice x     # incorrect-usage message
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use command_bridge::adapters::{ConsoleContext, InMemoryMessageCatalog};
use command_bridge::application::{AsyncCommandExecutor, TaskScope};
use command_bridge::config::AppConfig;
use command_bridge::domain::{
    Argument, ArgumentKind, CommandFailure, CommandHolder, HandlerError, MessageType,
    ParameterSpec,
};
use command_bridge::ports::{CommandContext, CommandHandler};

struct GreetCommand {
    shape: Vec<ParameterSpec>,
}

impl GreetCommand {
    fn new() -> Self {
        Self {
            shape: vec![
                ParameterSpec::required("name", ArgumentKind::Str),
                ParameterSpec::optional("times", ArgumentKind::Int).with_default("1"),
            ],
        }
    }
}

#[async_trait]
impl CommandHandler for GreetCommand {
    fn parameter_shape(&self) -> &[ParameterSpec] {
        &self.shape
    }

    async fn invoke(
        &self,
        args: Vec<Argument>,
        context: &dyn CommandContext,
    ) -> Result<(), HandlerError> {
        let name = args[0].as_str().unwrap_or("stranger");
        let times = args[1].as_int().unwrap_or(1);

        if times < 1 {
            return Err(CommandFailure::new(
                MessageType::Error,
                "times must be at least 1",
            )
            .into());
        }

        for _ in 0..times {
            context.send_message(&format!("Hello, {}!", name));
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let mut argv = std::env::args().skip(1);
    let label = argv.next().unwrap_or_else(|| "greet".to_string());
    let args: Vec<String> = argv.collect();

    let scope = Arc::new(TaskScope::new());
    let executor = AsyncCommandExecutor::new(
        Arc::clone(&scope),
        Arc::new(GreetCommand::new()),
        Arc::new(InMemoryMessageCatalog::new()),
        CommandHolder::new("greet", "greet <name> [times]")
            .with_description("Greets someone, optionally more than once"),
        &config.messages,
    )?;

    let context = Arc::new(ConsoleContext::new(label, args));
    executor.execute(context);

    scope.wait_idle().await;
    Ok(())
}
