//! The FSM engine.
//!
//! An [`Fsm`] owns a validated configuration, the current state, and a
//! single-slot undo/redo history. All operations are synchronous and take
//! `&mut self`; the engine is built for exclusive single-threaded
//! ownership, so callers needing shared access serialize it themselves.

mod error;

pub use error::FsmError;

use crate::config::{ConfigError, FsmConfig};
use crate::history::HistorySlot;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A finite state machine driven by a declarative transition table.
///
/// # Example
///
/// ```rust
/// use statecraft::{Fsm, FsmConfig};
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
/// let mut fsm = Fsm::new(config).unwrap();
/// assert_eq!(fsm.state(), "hungry");
///
/// fsm.trigger("eat").unwrap();
/// assert_eq!(fsm.state(), "sleeping");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "hungry");
///
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "sleeping");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: FsmConfig,
    // name -> position in config.states(), built once so state and
    // transition lookups stay O(1)
    index: HashMap<String, usize>,
    current: String,
    history: HistorySlot,
}

impl Fsm {
    /// Create an engine from a configuration.
    ///
    /// The configuration is validated first (see [`FsmConfig::validate`]),
    /// so a constructed engine can guarantee its current state is always a
    /// configured one.
    pub fn new(config: FsmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let index = config
            .states()
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name.clone(), i))
            .collect();
        Ok(Self {
            current: config.initial().to_string(),
            index,
            config,
            history: HistorySlot::new(),
        })
    }

    /// The active state identifier.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// The state displaced by the most recent change, if any.
    pub fn previous_state(&self) -> Option<&str> {
        self.history.previous()
    }

    /// The undo/redo bookkeeping, read-only.
    pub fn history(&self) -> &HistorySlot {
        &self.history
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    /// Go directly to `target`, bypassing the transition table.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not configured;
    /// the engine is untouched on failure. On success the displaced state
    /// lands in the history slot, the change counter increments, and any
    /// armed redo is disarmed.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.index.contains_key(target) {
            trace!(state = target, "change_state rejected: unknown state");
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }
        let displaced = std::mem::replace(&mut self.current, target.to_string());
        debug!(from = %displaced, to = %self.current, "state changed");
        self.history.record(displaced);
        Ok(())
    }

    /// Apply `event` according to the current state's transition table.
    ///
    /// Fails with [`FsmError::InvalidTransition`] if the current state has
    /// no transition for `event`; the engine is untouched on failure. On
    /// success the bookkeeping is identical to [`change_state`]
    /// (with the target taken from the table).
    ///
    /// [`change_state`]: Fsm::change_state
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let def = &self.config.states()[self.index[&self.current]];
        let Some(target) = def.transitions.get(event) else {
            trace!(state = %self.current, event, "trigger rejected: no such transition");
            return Err(FsmError::InvalidTransition {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };
        let displaced = std::mem::replace(&mut self.current, target.clone());
        debug!(from = %displaced, to = %self.current, event, "event applied");
        self.history.record(displaced);
        Ok(())
    }

    /// Snap back to the configured initial state.
    ///
    /// A hard reset, not a tracked transition: the history slot, the change
    /// counter, and the redo flag are all left as they are.
    pub fn reset(&mut self) {
        self.current = self.config.initial().to_string();
    }

    /// All configured state identifiers, in declaration order.
    pub fn states(&self) -> Vec<&str> {
        self.config
            .states()
            .iter()
            .map(|def| def.name.as_str())
            .collect()
    }

    /// The states whose transition table defines `event`, in declaration
    /// order.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.config
            .states()
            .iter()
            .filter(|def| def.transitions.contains_key(event))
            .map(|def| def.name.as_str())
            .collect()
    }

    /// Step back to the previous state. Returns `false` when there is
    /// nothing to undo.
    ///
    /// Every `undo` call counts against the shared change counter before
    /// its guards run. The counter therefore conflates forward changes with
    /// undo attempts, and enough repeated calls can slip past the counter
    /// guard and swap stale state; only the initial-state guard stands in
    /// the way. Long-standing observable behavior, kept as-is.
    pub fn undo(&mut self) -> bool {
        self.history.count_call();
        if self.history.change_count() <= 1 {
            trace!("undo rejected: nothing to undo");
            return false;
        }
        if self.current == self.config.initial() {
            trace!("undo rejected: already at the initial state");
            return false;
        }
        let Some(restored) = self.history.swap(self.current.clone()) else {
            return false;
        };
        self.current = restored;
        self.history.arm_redo();
        debug!(to = %self.current, "undo applied");
        true
    }

    /// Re-apply the change taken back by the last [`undo`](Fsm::undo).
    /// Returns `false` when no redo is available.
    ///
    /// A successful redo leaves the redo flag armed; the counter decrement
    /// bottoming out at zero is what stops a second consecutive call.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo_armed() {
            trace!("redo rejected: not armed");
            return false;
        }
        if self.history.debit() == 0 {
            trace!("redo rejected: history depth exhausted");
            return false;
        }
        let Some(restored) = self.history.swap(self.current.clone()) else {
            return false;
        };
        self.current = restored;
        debug!(to = %self.current, "redo applied");
        true
    }

    /// Zero the change counter, disabling undo until new changes accrue.
    /// The current state, the history slot, and the redo flag are left
    /// alone.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
