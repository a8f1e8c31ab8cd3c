//! Statemachine: an embeddable, event-driven finite state machine
//!
//! A host application declares named states and named transition rules in
//! code, then drives the machine with event names. The state graph lives in
//! data rather than in control flow.
//!
//! # Core Concepts
//!
//! - **State**: anything reporting a stable identifier via the `State` trait
//! - **Transition rule**: a named edge between two states, referenced by
//!   identifier or by state object, with an optional callback
//! - **Emission**: `emit` fires one event; events that do not apply are no-ops
//! - **History**: every committed transition is recorded for inspection
//!
//! # Example
//!
//! ```rust
//! use statemachine::{MachineConfig, StateMachine, TransitionRule};
//!
//! let config = MachineConfig::new()
//!     .state("solid")
//!     .state("liquid")
//!     .state("gas")
//!     .transition(TransitionRule::new("melt", "solid", "liquid"))
//!     .transition(TransitionRule::new("evaporate", "liquid", "gas"));
//!
//! let mut machine = StateMachine::from_config(config).unwrap();
//! machine.emit_sequence(["melt", "evaporate"]).unwrap();
//!
//! assert_eq!(machine.current_identifier(), Some("gas"));
//! assert_eq!(machine.history().get_path(), vec!["solid", "liquid", "gas"]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{
    BuildError, ConfigViolation, MachineConfig, StateMachineBuilder, TransitionRuleBuilder,
};
pub use core::{SharedState, State, StateHistory, StateRef, StateTransition};
pub use machine::{
    EmitOutcome, MachineError, StateMachine, TransitionCallback, TransitionRule,
    DEFAULT_HISTORY_LIMIT,
};
