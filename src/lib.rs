//! Statecraft: a declarative finite state machine engine.
//!
//! An [`Fsm`] is driven entirely by a configuration supplied at
//! construction: an initial state and a per-state table mapping event
//! names to target states. The engine tracks the current state, applies
//! events, allows direct state assignment, and keeps a deliberately
//! minimal single-slot undo/redo history.
//!
//! # Core Concepts
//!
//! - **Configuration**: [`FsmConfig`], built fluently, via the
//!   [`fsm_config!`] macro, or deserialized from JSON
//! - **Engine**: [`Fsm`], synchronous and exclusively owned
//! - **History**: [`HistorySlot`], one remembered previous state gated by
//!   a change counter and a redo flag
//!
//! # Example
//!
//! ```rust
//! use statecraft::{Fsm, fsm_config};
//!
//! let config = fsm_config! {
//!     initial: "hungry",
//!     states: {
//!         "hungry" => { "eat" => "sleeping" },
//!         "sleeping" => { "wake" => "hungry" },
//!     }
//! }
//! .unwrap();
//!
//! let mut fsm = Fsm::new(config).unwrap();
//!
//! fsm.trigger("eat").unwrap();
//! assert_eq!(fsm.state(), "sleeping");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "hungry");
//!
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "sleeping");
//! ```
//!
//! Failed operations never mutate the engine: an unknown state or event
//! comes back as a typed error carrying the offending identifiers, with
//! the current state, history slot, and counters untouched.

pub mod config;
pub mod history;
pub mod machine;

mod macros;

// Re-export commonly used types
pub use config::{ConfigBuilder, ConfigError, FsmConfig, StateDef};
pub use history::HistorySlot;
pub use machine::{Fsm, FsmError};
