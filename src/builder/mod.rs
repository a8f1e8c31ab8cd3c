//! Builder API for ergonomic state machine construction.
//!
//! This module provides the configuration bundle a machine is built from,
//! fluent builders for machines and rules, and the `state_enum!` macro.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use config::MachineConfig;
pub use error::{BuildError, ConfigViolation};
pub use machine::StateMachineBuilder;
pub use transition::TransitionRuleBuilder;
