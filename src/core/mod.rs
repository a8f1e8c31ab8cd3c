//! Core state types.
//!
//! This module contains the building blocks the engine is assembled from:
//! - State definitions via the `State` trait
//! - Identity resolution for rule endpoints via `StateRef`
//! - History of committed transitions

mod history;
mod identity;
mod state;

pub use history::{StateHistory, StateTransition};
pub use identity::StateRef;
pub use state::{SharedState, State};
