//! AsyncCommandExecutor - runs command handlers off the dispatcher thread.
//!
//! The dispatcher hands a matched invocation to
//! [`AsyncCommandExecutor::execute`], which schedules one task and returns
//! immediately. The task evaluates arguments, invokes the handler, and on
//! any failure resolves exactly one user-facing message through the
//! catalog. Raw causes never reach the invoker: they are logged here and
//! replaced by the configured internal-error text.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error};
use uuid::Uuid;

use crate::config::MessagesConfig;
use crate::domain::{
    ArgumentEvaluator, CommandFailure, CommandHolder, HandlerError, InvocationError, MessageType,
    ShapeError,
};
use crate::ports::{CommandContext, CommandHandler, MessageCatalog};

use super::TaskScope;

/// Everything needed to run and report one registered handler.
///
/// Built once at registration time; immutable for its lifetime, so
/// concurrent invocations share it without locking.
struct HandlerBinding {
    handler: Arc<dyn CommandHandler>,
    evaluator: ArgumentEvaluator,
    holder: CommandHolder,
    catalog: Arc<dyn MessageCatalog>,
    internal_error_text: String,
}

/// Executes one command's handler asynchronously, off the dispatcher
/// thread, with all failures mapped to catalog messages.
pub struct AsyncCommandExecutor {
    binding: Arc<HandlerBinding>,
    scope: Arc<TaskScope>,
}

impl AsyncCommandExecutor {
    /// Binds a handler into an executor.
    ///
    /// Builds the argument evaluator from the handler's declared parameter
    /// shape, failing fast if the shape cannot be evaluated.
    pub fn new(
        scope: Arc<TaskScope>,
        handler: Arc<dyn CommandHandler>,
        catalog: Arc<dyn MessageCatalog>,
        holder: CommandHolder,
        messages: &MessagesConfig,
    ) -> Result<Self, ShapeError> {
        let evaluator = ArgumentEvaluator::from_shape(handler.parameter_shape())?;
        Ok(Self {
            binding: Arc::new(HandlerBinding {
                handler,
                evaluator,
                holder,
                catalog,
                internal_error_text: messages.internal_error_message(),
            }),
            scope,
        })
    }

    /// Schedules the invocation and returns without blocking.
    ///
    /// The returned `false` tells the dispatcher this invocation is
    /// already being handled; it must not apply any unknown-command
    /// fallback. All argument evaluation, handler execution, and failure
    /// reporting happen in the scheduled task.
    pub fn execute(&self, context: Arc<dyn CommandContext>) -> bool {
        let binding = Arc::clone(&self.binding);
        let invocation_id = Uuid::new_v4();

        self.scope.spawn(async move {
            if let Err(failure) = run(&binding, context.as_ref()).await {
                report(&binding, context.as_ref(), invocation_id, failure);
            }
        });

        false
    }

    /// The registered command this executor is bound to.
    pub fn holder(&self) -> &CommandHolder {
        &self.binding.holder
    }
}

/// The scheduled task body: evaluate, then invoke.
///
/// Every failure is folded into an [`InvocationError`] at its point of
/// origin; nothing escapes to the runtime.
async fn run(
    binding: &HandlerBinding,
    context: &dyn CommandContext,
) -> Result<(), InvocationError> {
    let args = match binding.evaluator.parse(context.args()) {
        Ok(args) => args,
        Err(cause) => {
            // The evaluation detail is dropped from the user-facing path;
            // only the incorrect-usage category survives.
            debug!(command = %binding.holder.name(), %cause, "argument evaluation failed");
            return Err(InvocationError::Usage);
        }
    };

    let invoked = AssertUnwindSafe(binding.handler.invoke(args, context))
        .catch_unwind()
        .await;

    match invoked {
        Ok(Ok(())) => Ok(()),
        Ok(Err(HandlerError::Failure(failure))) => Err(InvocationError::Domain(failure)),
        Ok(Err(HandlerError::Internal(cause))) => Err(InvocationError::Unexpected(cause)),
        Err(panic) => Err(InvocationError::Unexpected(panic_message(panic).into())),
    }
}

/// Completion handler: classifies the failure, resolves one message, and
/// sends it. Runs exactly once per failed invocation, never on
/// cancellation.
fn report(
    binding: &HandlerBinding,
    context: &dyn CommandContext,
    invocation_id: Uuid,
    failure: InvocationError,
) {
    let message = match failure {
        InvocationError::Usage => binding
            .catalog
            .get_default(MessageType::IncorrectUsage, &binding.holder),
        InvocationError::Domain(failure) => resolve_domain(binding, invocation_id, failure),
        InvocationError::Unexpected(cause) => {
            error!(
                command = %binding.holder.name(),
                %invocation_id,
                %cause,
                "command handler failed unexpectedly"
            );
            binding.internal_error_text.clone()
        }
    };

    context.send_message(&message);
}

fn resolve_domain(
    binding: &HandlerBinding,
    invocation_id: Uuid,
    failure: CommandFailure,
) -> String {
    match (failure.message_type(), failure.detail()) {
        (Some(message_type), Some(detail)) => {
            binding.catalog.get_replacing(message_type, detail)
        }
        (Some(message_type), None) => binding
            .catalog
            .get_default(message_type, &binding.holder),
        (None, Some(detail)) => {
            error!(
                command = %binding.holder.name(),
                %invocation_id,
                %failure,
                "command failure without category"
            );
            binding.catalog.get_replacing(MessageType::Error, detail)
        }
        (None, None) => {
            error!(
                command = %binding.holder.name(),
                %invocation_id,
                "command failure without category or detail"
            );
            binding.internal_error_text.clone()
        }
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("handler panicked: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("handler panicked: {}", s)
    } else {
        "handler panicked".to_string()
    }
}
