//! Handler port - the command logic bound into an executor.

use async_trait::async_trait;

use crate::domain::{Argument, HandlerError, ParameterSpec};

use super::CommandContext;

/// One command's logic plus its declared parameter shape.
///
/// The executor builds its [`ArgumentEvaluator`] from
/// [`parameter_shape`](CommandHandler::parameter_shape) once at
/// registration time, so a shape that cannot be evaluated is rejected
/// before the command ever runs.
///
/// # Failure contract
///
/// - Return [`HandlerError::Failure`] for expected, user-facing errors;
///   the executor resolves them through the message catalog.
/// - Return [`HandlerError::Internal`] (or panic) for anything else; the
///   executor logs the cause and sends only the generic internal-error
///   text.
///
/// [`ArgumentEvaluator`]: crate::domain::ArgumentEvaluator
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Declared parameter shape, in invocation order.
    fn parameter_shape(&self) -> &[ParameterSpec];

    /// Runs the command with arguments evaluated against the shape,
    /// one [`Argument`] per declared parameter.
    ///
    /// Success feedback, if any, is the handler's own responsibility via
    /// `context`; the executor sends nothing on success.
    async fn invoke(
        &self,
        args: Vec<Argument>,
        context: &dyn CommandContext,
    ) -> Result<(), HandlerError>;
}
