//! Single-slot undo/redo bookkeeping.
//!
//! The engine deliberately remembers exactly one displaced state rather
//! than a full transition log. Undo depth is therefore one step, gated by
//! a shared change counter and a redo flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The one-slot history behind an [`Fsm`](crate::Fsm).
///
/// Holds the state displaced by the most recent change, the timestamp of
/// that change, the shared change counter, and whether a redo is armed.
/// The counter counts forward changes and `undo` calls alike; that overlap
/// is part of the engine's observable contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySlot {
    previous: Option<String>,
    changed_at: Option<DateTime<Utc>>,
    change_count: u64,
    redo_armed: bool,
}

impl HistorySlot {
    /// An empty slot: no previous state, zero counted changes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The state displaced by the most recent change, if any.
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// When the current state last changed, if it ever has.
    pub fn changed_at(&self) -> Option<DateTime<Utc>> {
        self.changed_at
    }

    /// Counted changes, including `undo` calls.
    pub fn change_count(&self) -> u64 {
        self.change_count
    }

    /// True only while a redo swap is available.
    pub fn redo_armed(&self) -> bool {
        self.redo_armed
    }

    /// Record a forward change: stash the displaced state, stamp the time,
    /// count it, and disarm redo.
    pub(crate) fn record(&mut self, displaced: String) {
        self.previous = Some(displaced);
        self.changed_at = Some(Utc::now());
        self.change_count += 1;
        self.redo_armed = false;
    }

    /// Count an `undo` call against the shared counter.
    pub(crate) fn count_call(&mut self) {
        self.change_count += 1;
    }

    /// Saturating counter decrement used by redo; returns the new value.
    pub(crate) fn debit(&mut self) -> u64 {
        self.change_count = self.change_count.saturating_sub(1);
        self.change_count
    }

    /// Exchange the slot with the current state. Returns `None` (and leaves
    /// the slot untouched) when there is nothing to swap with.
    pub(crate) fn swap(&mut self, current: String) -> Option<String> {
        let displaced = self.previous.take()?;
        self.previous = Some(current);
        self.changed_at = Some(Utc::now());
        Some(displaced)
    }

    pub(crate) fn arm_redo(&mut self) {
        self.redo_armed = true;
    }

    /// Zero the counter. Leaves the slot contents and the redo flag alone.
    pub(crate) fn clear(&mut self) {
        self.change_count = 0;
    }
}
