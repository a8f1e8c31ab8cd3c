//! The state machine engine.
//!
//! # Key Concepts
//!
//! - **Transition rules**: named edges with an optional pre-commit callback
//! - **State machine**: owns the state and rule registries and dispatches events
//! - **Errors**: lookup failures surface as [`MachineError`]; events that do
//!   not apply are reported as [`EmitOutcome`] values instead

mod engine;
mod error;
mod rule;

pub use error::MachineError;
pub use engine::{EmitOutcome, StateMachine, DEFAULT_HISTORY_LIMIT};
pub use rule::{TransitionCallback, TransitionRule};
