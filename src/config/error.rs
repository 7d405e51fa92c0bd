//! Configuration and builder errors.

use thiserror::Error;

/// Errors raised while building or validating an FSM configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitial,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("Initial state `{name}` is not in the state set")]
    UnknownInitial { name: String },

    #[error("State `{name}` is declared more than once")]
    DuplicateState { name: String },

    #[error("Transition `{event}` on state `{state}` targets undeclared state `{target}`")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Transition added before any state. Call .state(name) before .on(event, target)")]
    TransitionWithoutState,
}
