//! Domain layer - pure types and logic, no I/O.
//!
//! # Module Organization
//!
//! - `argument` - Typed argument model and the shape-derived evaluator
//! - `failure` - Failure taxonomy for command invocation
//! - `holder` - The registered command entity owning a handler binding
//! - `message` - Message categories for user-facing feedback

mod argument;
mod failure;
mod holder;
mod message;

pub use argument::{
    Argument, ArgumentEvaluator, ArgumentKind, EvaluationError, ParameterSpec, ShapeError,
};
pub use failure::{CommandFailure, HandlerError, InvocationError};
pub use holder::CommandHolder;
pub use message::MessageType;
