//! Context port - per-invocation link back to the invoker.

/// Per-invocation view of a matched command and the capability to reply.
///
/// Owned by the dispatcher; the executor only reads from it and calls
/// [`send_message`](CommandContext::send_message) at most once per
/// invocation (zero times if the task is cancelled first).
pub trait CommandContext: Send + Sync {
    /// The label the command was invoked with (alias-resolved by the
    /// dispatcher).
    fn label(&self) -> &str;

    /// Raw argument tokens, already split by the dispatcher.
    fn args(&self) -> &[String];

    /// Sends one message back to the invoker.
    fn send_message(&self, message: &str);
}
