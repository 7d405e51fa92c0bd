//! Declarative FSM configuration.
//!
//! A configuration is an initial state plus a declaration-ordered list of
//! state definitions, each carrying its own event -> target transition
//! table. Configurations are immutable once handed to an engine.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single state and its outgoing transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// State identifier, unique within the configuration.
    pub name: String,
    /// Event identifier -> target state identifier.
    #[serde(default)]
    pub transitions: HashMap<String, String>,
}

/// Immutable FSM configuration: an initial state and the state set.
///
/// States are kept in declaration order, which is the order queries such as
/// [`Fsm::states`](crate::Fsm::states) report them in. Construct one with
/// [`FsmConfig::builder`], the [`fsm_config!`](crate::fsm_config) macro, or
/// deserialize it from JSON:
///
/// ```rust
/// use statecraft::FsmConfig;
///
/// let config: FsmConfig = serde_json::from_str(
///     r#"{
///         "initial": "hungry",
///         "states": [
///             { "name": "hungry", "transitions": { "eat": "sleeping" } },
///             { "name": "sleeping", "transitions": { "wake": "hungry" } }
///         ]
///     }"#,
/// )
/// .unwrap();
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsmConfig {
    initial: String,
    states: Vec<StateDef>,
}

impl FsmConfig {
    /// Start a fluent [`ConfigBuilder`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// The configured initial state identifier.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// All state definitions, in declaration order.
    pub fn states(&self) -> &[StateDef] {
        &self.states
    }

    /// Look up a state definition by name.
    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Check the configuration for structural problems.
    ///
    /// Rejects an empty state set, a missing or undeclared initial state,
    /// duplicate state names, and transitions targeting undeclared states.
    /// The last check is what lets an engine guarantee its current state is
    /// always a configured one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.states.is_empty() {
            return Err(ConfigError::NoStates);
        }
        if self.initial.is_empty() {
            return Err(ConfigError::MissingInitial);
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.states.len());
        for def in &self.states {
            if seen.contains(&def.name.as_str()) {
                return Err(ConfigError::DuplicateState {
                    name: def.name.clone(),
                });
            }
            seen.push(&def.name);
        }

        if !seen.contains(&self.initial.as_str()) {
            return Err(ConfigError::UnknownInitial {
                name: self.initial.clone(),
            });
        }

        for def in &self.states {
            for (event, target) in &def.transitions {
                if !seen.contains(&target.as_str()) {
                    return Err(ConfigError::UnknownTarget {
                        state: def.name.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`FsmConfig`].
///
/// `.on(event, target)` attaches a transition to the most recently declared
/// state. Validation happens in [`build`](ConfigBuilder::build).
///
/// # Example
///
/// ```rust
/// use statecraft::FsmConfig;
///
/// let config = FsmConfig::builder()
///     .initial("hungry")
///     .state("hungry")
///     .on("eat", "sleeping")
///     .state("sleeping")
///     .on("wake", "hungry")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial(), "hungry");
/// assert_eq!(config.states().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Vec<StateDef>,
    orphan_transition: bool,
}

impl ConfigBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Declare a state. Declaration order is preserved.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(StateDef {
            name: name.into(),
            transitions: HashMap::new(),
        });
        self
    }

    /// Add a transition to the most recently declared state.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        match self.states.last_mut() {
            Some(def) => {
                def.transitions.insert(event.into(), target.into());
            }
            None => self.orphan_transition = true,
        }
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<FsmConfig, ConfigError> {
        if self.orphan_transition {
            return Err(ConfigError::TransitionWithoutState);
        }
        let config = FsmConfig {
            initial: self.initial.ok_or(ConfigError::MissingInitial)?,
            states: self.states,
        };
        config.validate()?;
        Ok(config)
    }
}
