//! Runtime errors raised by the engine.

use thiserror::Error;

/// Errors raised by [`Fsm`](crate::Fsm) operations.
///
/// Both variants carry the offending identifiers, and both are guaranteed
/// non-mutating: an operation that returns one of these leaves the engine
/// exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsmError {
    /// `change_state` named a state that is not in the configuration.
    #[error("State `{state}` is not in the configured state set")]
    InvalidState { state: String },

    /// `trigger` named an event the current state has no transition for.
    #[error("State `{state}` has no transition for event `{event}`")]
    InvalidTransition { state: String, event: String },
}
